//! Unified interface for the Maquette mock LLM playground.
//!
//! Re-exports the core types, the mock engine and HTTP API, and the
//! client session so downstream code can depend on a single crate.

pub use maquette_core::{
    FinishReason, GenerationParameters, GenerationRequest, GenerationResult, Generator,
    ModelCatalog, ModelDescriptor, ModelPricing, ResponseMetadata, Template, TemplateCatalog,
    TemplateDraft,
};
pub use maquette_error::{
    ConfigError, GenerationError, GenerationErrorKind, MaquetteError, TransportError,
    ValidationError,
};
pub use maquette_server::{
    ApiState, Clock, EngineConfig, FixedClock, MockEngine, ServerConfig, SystemClock,
    create_router,
};
pub use maquette_session::{HttpGenerator, Session, SessionPhase};
