use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoctorBaseError {
    #[error("{message}")]
    ParseError { message: String },

    #[error("{message}")]
    CommandError { message: String },

    #[error("Could not save data due to the following error: {reason}")]
    SaveError {
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error(
        "Could not save data to file {path} due to insufficient permissions to write to the file or the folder."
    )]
    SavePermissionError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage error at {}: {source}", path.display())]
    StorageError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data loading error: {message}")]
    DataLoadingError { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Operation would result in duplicate patients: {name}")]
    DuplicatePatient { name: String },

    #[error("Patient not found: {name}")]
    PatientNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DoctorBaseError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::CommandError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn data_loading(message: impl Into<String>) -> Self {
        Self::DataLoadingError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseError { .. }
            | Self::CommandError { .. }
            | Self::ValidationError { .. }
            | Self::DuplicatePatient { .. }
            | Self::PatientNotFound { .. } => ErrorCategory::UserInput,
            Self::SaveError { .. }
            | Self::SavePermissionError { .. }
            | Self::StorageError { .. }
            | Self::IoError(_) => ErrorCategory::Storage,
            Self::DataLoadingError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => "Check the command format with `help`",
            Self::SavePermissionError { .. } => {
                "Make the data file and its folder writable, or choose another data file"
            }
            Self::SaveError { .. } | Self::StorageError { .. } | Self::IoError(_) => {
                "Check free disk space and that the data folder exists"
            }
            Self::DataLoadingError { .. } => {
                "Fix or remove the data file; a fresh one will be created"
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the TOML configuration file",
            _ => "Adjust the command and try again",
        }
    }

    /// Message shown to the user. User-input and save errors already carry readable text.
    pub fn user_friendly_message(&self) -> String {
        if matches!(self, Self::SaveError { .. } | Self::SavePermissionError { .. }) {
            return self.to_string();
        }
        match self.category() {
            ErrorCategory::UserInput => self.to_string(),
            ErrorCategory::Storage => format!("Storage problem: {}", self),
            ErrorCategory::Data => format!("Data file problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DoctorBaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_save_permission_message_names_file() {
        let err = DoctorBaseError::SavePermissionError {
            path: "data/doctorbase.json".to_string(),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.to_string(),
            "Could not save data to file data/doctorbase.json due to insufficient permissions to write to the file or the folder."
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_save_error_message() {
        let err = DoctorBaseError::SaveError {
            reason: "disk full".to_string(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "Could not save data due to the following error: disk full"
        );
    }

    #[test]
    fn test_categories_and_severity() {
        assert_eq!(
            DoctorBaseError::parse("bad").category(),
            ErrorCategory::UserInput
        );
        assert_eq!(DoctorBaseError::parse("bad").severity(), ErrorSeverity::Low);
        assert_eq!(
            DoctorBaseError::MissingConfigError {
                field: "storage".to_string()
            }
            .severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            DoctorBaseError::data_loading("oops").category(),
            ErrorCategory::Data
        );
    }

    #[test]
    fn test_save_errors_are_shown_unprefixed() {
        let err = DoctorBaseError::SaveError {
            reason: "disk full".to_string(),
            source: None,
        };
        assert_eq!(
            err.user_friendly_message(),
            "Could not save data due to the following error: disk full"
        );

        let err = DoctorBaseError::SavePermissionError {
            path: "db.json".to_string(),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.user_friendly_message(), err.to_string());

        let err = DoctorBaseError::data_loading("oops");
        assert!(err.user_friendly_message().starts_with("Data file problem: "));
    }

    #[test]
    fn test_user_input_message_is_passed_through() {
        let err = DoctorBaseError::command("No patient selected");
        assert_eq!(err.user_friendly_message(), "No patient selected");
    }
}
