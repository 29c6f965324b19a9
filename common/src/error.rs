//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file type: {0} (expected .xls or .xlsx)")]
    UnsupportedFileType(String),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    #[error("Invalid exam date: {0}")]
    InvalidDate(String),

    #[error("Upload not ready: {0}")]
    UploadNotReady(&'static str),

    #[error("Not available in the current view: {0}")]
    InvalidTransition(&'static str),

    #[error("Unknown form tab: {0}")]
    UnknownFormTab(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("Invalid choice for {field}: {value}")]
    InvalidChoice { field: String, value: String },
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_file() {
        let error = Error::UnsupportedFileType("data.csv".to_string());
        let display = format!("{}", error);
        assert!(display.contains("data.csv"));
        assert!(display.contains(".xlsx"));
    }

    #[test]
    fn test_error_display_transition() {
        let error = Error::InvalidTransition("no batch under verification");
        assert_eq!(
            format!("{}", error),
            "Not available in the current view: no batch under verification"
        );
    }

    #[test]
    fn test_error_display_read_only() {
        let error = Error::ReadOnlyField("summary.2.1".to_string());
        assert!(format!("{}", error).contains("summary.2.1"));
    }

    #[test]
    fn test_error_display_invalid_choice() {
        let error = Error::InvalidChoice {
            field: "info.1.4".to_string(),
            value: "Lainnya".to_string(),
        };
        assert_eq!(format!("{}", error), "Invalid choice for info.1.4: Lainnya");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::ParticipantNotFound("ind-99".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("ParticipantNotFound"));
        assert!(debug.contains("ind-99"));
    }
}
