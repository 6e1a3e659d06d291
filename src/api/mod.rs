//! HTTP API module for the timesheet engine.
//!
//! This module provides stateless REST endpoints for deriving rate tables
//! and calculating fortnightly pay. Nothing is persisted between requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PublicHolidayRequest};
pub use response::{ApiError, ApiErrorResponse, FortnightResult};
pub use state::AppState;
