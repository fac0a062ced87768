use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Image encoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, KitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Render,
    Archive,
    Io,
}

impl KitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::ConfigError { .. }
            | KitError::InvalidConfigValueError { .. }
            | KitError::MissingConfigError { .. }
            | KitError::SerializationError(_) => ErrorCategory::Configuration,
            KitError::ImageError(_) => ErrorCategory::Render,
            KitError::ZipError(_) | KitError::WalkError(_) => ErrorCategory::Archive,
            KitError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KitError::ConfigError { .. }
            | KitError::InvalidConfigValueError { .. }
            | KitError::MissingConfigError { .. }
            | KitError::SerializationError(_) => ErrorSeverity::Medium,
            KitError::ImageError(_) | KitError::ZipError(_) | KitError::WalkError(_) => {
                ErrorSeverity::High
            }
            KitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KitError::ConfigError { .. }
            | KitError::InvalidConfigValueError { .. }
            | KitError::MissingConfigError { .. } => {
                "Check the command line flags or the TOML build file"
            }
            KitError::SerializationError(_) => "Check the configuration file syntax",
            KitError::ImageError(_) => "Check the requested icon sizes",
            KitError::ZipError(_) | KitError::WalkError(_) => {
                "Check that the source directory is readable"
            }
            KitError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KitError::ConfigError { message } => format!("Configuration problem: {}", message),
            KitError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            KitError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = KitError::MissingConfigError {
            field: "source_dir".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = KitError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_user_friendly_message_names_the_field() {
        let err = KitError::InvalidConfigValueError {
            field: "sizes".to_string(),
            value: "0".to_string(),
            reason: "sizes must be positive".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(msg.contains("sizes"));
        assert!(msg.contains('0'));
    }
}
