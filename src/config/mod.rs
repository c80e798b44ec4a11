pub mod settings;
pub mod toml_config;

pub use settings::ServerSettings;

use serde::{Deserialize, Serialize};

/// 錯誤對應到 HTTP 狀態碼的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ErrorStatusPolicy {
    /// 所有錯誤都回 500 (既有行為)
    #[default]
    #[serde(rename = "legacy")]
    #[cfg_attr(feature = "cli", value(name = "legacy"))]
    Legacy,
    /// 解碼與驗證錯誤回 400
    #[serde(rename = "client")]
    #[cfg_attr(feature = "cli", value(name = "client"))]
    ClientError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "investment-planner")]
#[command(about = "HTTP service computing the future value of a recurring investment plan")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override api.error_status
    #[arg(long, value_enum)]
    pub error_status: Option<ErrorStatusPolicy>,

    /// Emit JSON log lines instead of compact text
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
