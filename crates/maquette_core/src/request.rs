//! Generation request types.

use crate::{GenerationParameters, ModelDescriptor};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single generation request.
///
/// Constructed fresh per call from the session's current state; never
/// persisted. The prompt must be non-empty by the time the engine sees it,
/// which the engine enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// The selected model
    model: ModelDescriptor,
    /// The prompt text
    prompt: String,
    /// Tuning parameters, copied from the session
    #[builder(default)]
    parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Creates a builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}
