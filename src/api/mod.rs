//! HTTP API module for the calculator engine.
//!
//! This module exposes every calculator behind a single `POST /calculate`
//! endpoint, plus eligibility-profile validation and a health check.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{
    ApiError, CalculationOutput, CalculationResponse, ENGINE_VERSION, HealthResponse,
    ProfileResponse,
};
pub use state::AppState;
