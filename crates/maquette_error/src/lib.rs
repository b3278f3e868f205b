//! Error types for the Maquette mock LLM playground.
//!
//! Each domain gets its own error struct carrying a message and the source
//! location where the error was raised. The [`MaquetteError`] enum aggregates
//! them for callers that cross domain boundaries.

mod config;
mod generation;
mod transport;
mod validation;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use transport::TransportError;
pub use validation::ValidationError;

/// Aggregate error for operations that cross crate boundaries.
#[derive(Debug, Clone, derive_more::From)]
pub enum MaquetteError {
    /// Request failed validation before any work was done.
    Validation(ValidationError),
    /// The transport layer failed to deliver a request or response.
    Transport(TransportError),
    /// The generation engine failed after validation.
    Generation(GenerationError),
    /// Configuration could not be loaded or parsed.
    Config(ConfigError),
}

impl std::fmt::Display for MaquetteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaquetteError::Validation(e) => write!(f, "{}", e),
            MaquetteError::Transport(e) => write!(f, "{}", e),
            MaquetteError::Generation(e) => write!(f, "{}", e),
            MaquetteError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MaquetteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaquetteError::Validation(e) => Some(e),
            MaquetteError::Transport(e) => Some(e),
            MaquetteError::Generation(e) => Some(e),
            MaquetteError::Config(e) => Some(e),
        }
    }
}
