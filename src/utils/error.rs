use thiserror::Error;

/// 承運商回傳的業務錯誤 (fault 已成功解析)
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierError {
    pub code: String,
    pub message: String,
    /// Original fault document, kept for diagnostics only.
    pub fault: serde_json::Value,
}

impl std::fmt::Display for CarrierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CarrierError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Carrier,
    Contract,
    Transport,
    Configuration,
}

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{0}")]
    CarrierError(CarrierError),

    #[error("Malformed carrier fault: {message}")]
    MalformedFaultError {
        message: String,
        fault: serde_json::Value,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatusError { status: u16, body: String },

    #[error("Response decoding error: {message}")]
    DecodeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl RateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::CarrierError(_) => ErrorCategory::Carrier,
            Self::MalformedFaultError { .. } | Self::DecodeError { .. } => ErrorCategory::Contract,
            Self::ApiError(_) | Self::UnexpectedStatusError { .. } => ErrorCategory::Transport,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// The carrier's machine-readable error code, when the carrier rejected the request.
    pub fn carrier_code(&self) -> Option<&str> {
        match self {
            Self::CarrierError(err) => Some(&err.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_error_displays_message_verbatim() {
        let err = RateError::CarrierError(CarrierError {
            code: "111210".to_string(),
            message: "UPS Error 111210: The requested service is unavailable".to_string(),
            fault: serde_json::Value::Null,
        });

        assert_eq!(
            err.to_string(),
            "UPS Error 111210: The requested service is unavailable"
        );
        assert_eq!(err.carrier_code(), Some("111210"));
        assert_eq!(err.category(), ErrorCategory::Carrier);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            RateError::validation("no packages").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            RateError::MalformedFaultError {
                message: "missing code".to_string(),
                fault: serde_json::Value::Null,
            }
            .category(),
            ErrorCategory::Contract
        );
        assert_eq!(
            RateError::MissingConfigError {
                field: "credentials.username".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert!(RateError::validation("x").carrier_code().is_none());
    }
}
