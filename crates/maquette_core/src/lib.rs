//! Core data types for the Maquette mock LLM playground.
//!
//! This crate provides the foundation data types shared by the mock server
//! and the client session: model descriptors, generation parameters,
//! requests and results, prompt templates, the static catalogs, and the
//! [`Generator`] trait that seams the two halves together.

mod catalog;
mod generator;
mod model;
mod parameters;
mod request;
mod result;
mod template;

pub use catalog::{ModelCatalog, TemplateCatalog};
pub use generator::Generator;
pub use model::{ModelDescriptor, ModelPricing};
pub use parameters::GenerationParameters;
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use result::{FinishReason, GenerationResult, ResponseMetadata};
pub use template::{Template, TemplateDraft};
