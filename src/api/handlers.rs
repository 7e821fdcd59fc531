//! HTTP request handlers for the Stay Allowance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EvaluationOptions, evaluate_trips};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{EvaluationResult, Trip};

use super::request::EvaluationRequest;
use super::response::{ApiError, ApiErrorResponse, RuleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/rule", get(rule_handler))
        .with_state(state)
}

/// Handler for GET /rule.
async fn rule_handler(State(state): State<AppState>) -> Json<RuleResponse> {
    let config = state.config();
    Json(RuleResponse::new(
        config.rule().clone(),
        config.limits().max_trips,
    ))
}

/// Handler for POST /evaluate.
///
/// Accepts the caller's trip list and returns the usage series, unlock
/// events and compliance report.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_evaluation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                trips = result.trip_count,
                present_days = result.present_day_count,
                unlock_events = result.unlock_events.len(),
                status = ?result.compliance.status,
                duration_us = result.duration_us,
                "Evaluation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Applies request limits and runs the evaluation pipeline.
fn perform_evaluation(
    request: EvaluationRequest,
    config: &ConfigLoader,
) -> EngineResult<EvaluationResult> {
    let trips: Vec<Trip> = request.trips.into_iter().map(Into::into).collect();
    config.check_trips(&trips)?;

    let options = EvaluationOptions {
        reference_date: request
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive()),
        planned_entry_date: request.planned_entry_date,
        dedupe_unlock_dates: request.dedupe_unlock_dates,
        date_format: config.limits().date_format.clone(),
    };

    evaluate_trips(&trips, &options)
}
