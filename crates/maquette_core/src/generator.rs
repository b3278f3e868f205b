//! The generation seam between sessions and engines.

use crate::{GenerationRequest, GenerationResult};
use maquette_error::MaquetteError;

/// A source of generation results.
///
/// Implemented by the in-process mock engine and by the HTTP client that
/// talks to a remote playground server. Sessions depend on this contract
/// only, never on an implementation's internals.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Produces a result for the given request.
    ///
    /// Fails with [`maquette_error::ValidationError`] when the request is
    /// missing its model or prompt, before any other work is done.
    async fn generate(&self, request: &GenerationRequest)
    -> Result<GenerationResult, MaquetteError>;
}
