use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Store request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Store rejected the request (HTTP {status}): {message}")]
    StoreError { status: u16, message: String },

    #[error("Not enough players to build groups: need at least {required}, have {actual}")]
    InsufficientPlayers { required: usize, actual: usize },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤分類，對應使用者可見的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Store,
    Precondition,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        RosterError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::ValidationError { .. } => ErrorCategory::Validation,
            RosterError::ApiError(_) | RosterError::StoreError { .. } => ErrorCategory::Store,
            RosterError::InsufficientPlayers { .. } => ErrorCategory::Precondition,
            RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. }
            | RosterError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RosterError::CsvError(_)
            | RosterError::IoError(_)
            | RosterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Precondition => ErrorSeverity::Low,
            ErrorCategory::Store => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息；遠端錯誤一律收斂成通用提示
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::ValidationError { message, .. } => message.clone(),
            RosterError::ApiError(_) | RosterError::StoreError { .. } => {
                "Something went wrong talking to the player store. Please try again.".to_string()
            }
            RosterError::InsufficientPlayers { required, .. } => {
                format!("Add at least {} players before generating groups.", required)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the player details and submit again",
            ErrorCategory::Store => "Verify the store endpoint and API key, then retry",
            ErrorCategory::Precondition => "Add more players to the roster",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures_collapse_to_generic_message() {
        let err = RosterError::StoreError {
            status: 503,
            message: "upstream connect error".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Store);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(!err.user_friendly_message().contains("upstream"));
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = RosterError::validation("name", "Name is required");

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.user_friendly_message(), "Name is required");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_insufficient_players_is_precondition() {
        let err = RosterError::InsufficientPlayers {
            required: 2,
            actual: 1,
        };

        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert!(err.to_string().contains("have 1"));
    }
}
