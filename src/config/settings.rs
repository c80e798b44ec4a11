use crate::config::toml_config::TomlConfig;
use crate::config::{ErrorStatusPolicy, LogFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, Validate,
};

#[cfg(feature = "cli")]
use crate::config::CliConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 合併後的伺服器設定：預設值 < TOML 檔 < 命令列參數
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub error_status: ErrorStatusPolicy,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            error_status: ErrorStatusPolicy::Legacy,
        }
    }
}

impl ServerSettings {
    /// 以 TOML 檔中有設定的欄位覆蓋預設值
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();

        Self {
            host: config.server.host.clone().unwrap_or(defaults.host),
            port: config.server.port.unwrap_or(defaults.port),
            log_level: config.logging.level.clone().unwrap_or(defaults.log_level),
            log_format: config.logging.format.unwrap_or(defaults.log_format),
            error_status: config.api.error_status.unwrap_or(defaults.error_status),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_toml(&TomlConfig::from_file(path)?),
            None => Self::default(),
        };

        if let Some(host) = &cli.host {
            settings.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.port = port;
        }
        if let Some(policy) = cli.error_status {
            settings.error_status = policy;
        }
        if cli.json_logs {
            settings.log_format = LogFormat::Json;
        }
        if cli.verbose {
            settings.log_level = "debug".to_string();
        }

        Ok(settings)
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn error_status(&self) -> ErrorStatusPolicy {
        self.error_status
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_positive_number("server.port", self.port, 1)?;
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)?;
        Ok(())
    }
}
