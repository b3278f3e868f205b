//! Request validation error types.

/// Validation error with source location.
///
/// Raised when a generation request is missing required fields or carries
/// out-of-range parameter values. The message is user-facing and surfaced
/// verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The user-facing error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_error::ValidationError;
    ///
    /// let err = ValidationError::new("Model and prompt are required");
    /// assert!(err.message.contains("required"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The canonical error for a request missing its model or prompt.
    #[track_caller]
    pub fn missing_fields() -> Self {
        Self::new("Model and prompt are required")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
