pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::server::ApiServer;
pub use config::{ErrorStatusPolicy, LogFormat, ServerSettings};
pub use crate::core::calculator::{compute, round_to_cents, CompoundInterestCalculator};
pub use domain::model::{InvestmentRequest, InvestmentResponse};
pub use domain::ports::{Calculator, ConfigProvider};
pub use utils::error::{PlannerError, Result};
