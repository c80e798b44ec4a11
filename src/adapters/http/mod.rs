pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::build_router;

use crate::config::ErrorStatusPolicy;
use crate::domain::ports::Calculator;
use crate::utils::error::PlannerError;
use std::sync::Arc;

/// Shared handler state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<dyn Calculator>,
    pub error_status: ErrorStatusPolicy,
}

impl AppState {
    pub fn new(calculator: Arc<dyn Calculator>, error_status: ErrorStatusPolicy) -> Self {
        Self {
            calculator,
            error_status,
        }
    }

    fn reject(&self, error: PlannerError) -> ApiError {
        ApiError::new(error, self.error_status)
    }
}
