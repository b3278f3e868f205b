//! Model descriptor types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Per-1K-token pricing for a model, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct ModelPricing {
    /// Cost per 1K input tokens
    input: f64,
    /// Cost per 1K output tokens
    output: f64,
}

impl ModelPricing {
    /// Creates a new pricing entry.
    pub fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

/// Static metadata identifying a selectable generation backend.
///
/// Catalog entries are immutable: a session selects a descriptor but never
/// mutates one.
///
/// # Examples
///
/// ```
/// use maquette_core::ModelDescriptor;
///
/// let model = ModelDescriptor::adhoc("GPT-4", "OpenAI");
/// assert_eq!(model.name(), "GPT-4");
/// assert_eq!(model.provider(), "OpenAI");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Stable catalog identifier (e.g., "gpt-4-turbo")
    id: String,
    /// Human-readable model name
    name: String,
    /// Short description for selection UIs
    description: String,
    /// Provider name (e.g., "OpenAI", "Anthropic")
    provider: String,
    /// Context window size in tokens
    context_length: u32,
    /// Pricing, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pricing: Option<ModelPricing>,
}

impl ModelDescriptor {
    /// Creates a full catalog entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        provider: impl Into<String>,
        context_length: u32,
        pricing: ModelPricing,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            provider: provider.into(),
            context_length,
            pricing: Some(pricing),
        }
    }

    /// Creates a descriptor from a bare name and provider.
    ///
    /// Used when a request names a model outside the static catalog; the
    /// id is derived by slugifying the name.
    pub fn adhoc(name: impl Into<String>, provider: impl Into<String>) -> Self {
        let name = name.into();
        let id = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        Self {
            id,
            name,
            description: String::new(),
            provider: provider.into(),
            context_length: 0,
            pricing: None,
        }
    }
}
