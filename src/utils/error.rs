use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Validation error: {field} {message}")]
    ValidationError { field: String, message: String },

    #[error("Request decoding failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Calculation error: {message}")]
    CalculationError { message: String },

    #[error("Configuration error: {field} - {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PlannerError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn config(field: &str, message: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 呼叫端輸入造成的錯誤 (解碼或驗證失敗)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. } | Self::DecodeError(_))
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { field, message } => {
                format!("Invalid input: {} {}", field, message)
            }
            Self::DecodeError(e) => format!("Request body is not valid JSON: {}", e),
            Self::CalculationError { message } => {
                format!("Calculation could not be completed: {}", message)
            }
            Self::ConfigError { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
