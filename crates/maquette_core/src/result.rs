//! Generation result types.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Why generation stopped.
///
/// The mock engine always finishes with [`FinishReason::Stop`]; the enum
/// exists so the wire contract has room for length/filter outcomes later.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FinishReason {
    /// Generation completed naturally
    Stop,
}

/// Metadata attached to a completed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ResponseMetadata {
    /// Name of the model that "produced" the response
    model: String,
    /// Provider of that model
    provider: String,
    /// Synthetic token count, always positive
    tokens: u32,
    /// Temperature the request was issued with
    temperature: f32,
    /// Token cap the request was issued with
    max_tokens: u32,
    /// Why generation stopped
    finish_reason: FinishReason,
    /// Completion time of the call
    timestamp: DateTime<Utc>,
}

impl ResponseMetadata {
    /// Creates a builder for ResponseMetadata.
    pub fn builder() -> ResponseMetadataBuilder {
        ResponseMetadataBuilder::default()
    }
}

/// A completed generation.
///
/// Exactly one result (or none) is current per session; issuing a new
/// request supersedes the previous result at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// The generated text
    content: String,
    /// Generation metadata
    metadata: ResponseMetadata,
}

impl GenerationResult {
    /// Creates a new result.
    pub fn new(content: impl Into<String>, metadata: ResponseMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}
