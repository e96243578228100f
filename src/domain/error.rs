//! Error types for the zform plugin.
//!
//! Field validation failures are not errors in this sense: they live in the
//! [`ErrorMap`](crate::validation::ErrorMap) and never leave the form engine.
//! [`ZformError`] covers the runtime faults around the engine, such as export
//! I/O, JSON encoding and theme loading.

use thiserror::Error;

/// The main error type for zform plugin operations.
///
/// Most variants carry a description of what went wrong; I/O and JSON errors
/// convert automatically through `#[from]`.
///
/// # Examples
///
/// ```
/// use zform::ZformError;
///
/// fn check_export_dir(dir: &str) -> Result<(), ZformError> {
///     if dir.is_empty() {
///         return Err(ZformError::Export("export directory must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_export_dir("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZformError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised while writing export files or inspecting a resume attachment.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    ///
    /// Raised by the JSON export and by the worker IPC codec.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Export was requested in a state that does not allow it, or the export
    /// target could not be prepared.
    #[error("Export error: {0}")]
    Export(String),

    /// A resume path does not name a regular file.
    #[error("Attachment error: {0}")]
    Attachment(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

}

/// A specialized `Result` type for zform operations.
pub type Result<T> = std::result::Result<T, ZformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_keep_their_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ZformError = io.into();
        assert_eq!(err.to_string(), "IO error: missing");
    }

    #[test]
    fn attachment_error_formats_with_prefix() {
        let err = ZformError::Attachment("not a file: /host/cv".to_string());
        assert_eq!(err.to_string(), "Attachment error: not a file: /host/cv");
    }

    #[test]
    fn export_error_formats_with_prefix() {
        let err = ZformError::Export("form is not submitted".to_string());
        assert_eq!(err.to_string(), "Export error: form is not submitted");
    }
}
