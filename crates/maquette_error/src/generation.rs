//! Generation error types.

/// Specific error conditions for generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// A saved-template draft was missing its name or prompt
    TemplateDraft(String),
    /// The engine failed after validation passed
    Internal(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::TemplateDraft(msg) => {
                write!(f, "Invalid template draft: {}", msg)
            }
            GenerationErrorKind::Internal(msg) => {
                write!(f, "Generation failed: {}", msg)
            }
        }
    }
}

/// Error type for generation operations.
///
/// # Examples
///
/// ```
/// use maquette_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Internal("rng poisoned".into()));
/// assert!(err.to_string().contains("rng poisoned"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific failure condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
