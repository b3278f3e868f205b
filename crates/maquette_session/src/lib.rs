//! Client orchestration state for the Maquette playground.
//!
//! A [`Session`] owns what the UI edits (model selection, prompt,
//! parameters) and drives a [`maquette_core::Generator`] through an
//! explicit two-phase state machine. The [`HttpGenerator`] implements the
//! generator contract over the playground server's JSON API.

mod http;
mod session;

pub use http::HttpGenerator;
pub use session::{Session, SessionPhase};
