//! Error types for the Keanuverse portal

use thiserror::Error;

use crate::intake::IntakeError;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// A form field failed validation
    #[error("{message}")]
    Validation {
        /// Field key the message belongs to
        field: String,
        /// Message surfaced inline next to the field
        message: String,
    },

    /// Uploaded file exceeds the size cap
    #[error("File is too large. Maximum size is {}MB.", .limit / (1024 * 1024))]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Cap in bytes
        limit: u64,
    },

    /// File type not accepted by the upload surface
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    /// Camera/microphone permission was refused
    #[error("Could not access camera: {0}")]
    CaptureDenied(String),

    /// A capture stream is already live in this registry
    #[error("A capture stream is already active")]
    CaptureBusy,

    /// Recorder asked to do something invalid for its current state
    #[error("Recorder state error: {0}")]
    RecorderState(String),

    /// Submission intake failed
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    /// Image decoding failed
    #[error("Failed to load image: {0}")]
    Image(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    /// Build a field-validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_display() {
        let err = PortalError::FileTooLarge {
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        };
        assert_eq!(format!("{}", err), "File is too large. Maximum size is 5MB.");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let portal_err: PortalError = io_err.into();
        assert!(matches!(portal_err, PortalError::Io(_)));
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = PortalError::validation("email", "Please enter a valid email address");
        assert_eq!(format!("{}", err), "Please enter a valid email address");
    }
}
