//! Mock generation engine and HTTP API for the Maquette playground.
//!
//! The engine fabricates responses from canned templates with randomized
//! delays and token counts; randomness and time are injectable so tests
//! can pin every outcome. The API crate-half exposes the engine and the
//! static catalogs over JSON/HTTP via axum.

pub mod api;
mod clock;
mod config;
mod engine;

pub use api::{ApiState, create_router};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServerConfig;
pub use engine::{EngineConfig, EngineConfigBuilder, MockEngine};
