//! HTTP API module for the Stay Allowance Engine.
//!
//! This module exposes the evaluation pipeline over HTTP. It is stateless
//! with respect to trips: every request carries the caller's full trip list.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, TripRequest};
pub use response::{ApiError, RuleResponse};
pub use state::AppState;
