//! HTTP API for the mock playground.
//!
//! Routes mirror the single-page client's contract: a generation exchange
//! plus read-only model and template catalogs. All bodies are JSON.

use crate::engine::MockEngine;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get, routing::post};
use chrono::Utc;
use maquette_core::{
    GenerationParameters, GenerationRequest, ModelCatalog, ModelDescriptor, TemplateCatalog,
    TemplateDraft,
};
use maquette_error::{GenerationErrorKind, MaquetteError};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, RwLock};
use tracing::{instrument, warn};
use uuid::Uuid;

/// API server state.
///
/// Catalogs are built once at startup and shared by reference; the
/// template catalog is writable because templates can be saved at runtime.
#[derive(Clone)]
pub struct ApiState {
    /// The mock generation engine.
    pub engine: Arc<MockEngine>,
    /// The static model catalog.
    pub models: Arc<ModelCatalog>,
    /// Built-in plus runtime-saved templates.
    pub templates: Arc<RwLock<TemplateCatalog>>,
}

impl ApiState {
    /// Creates state over an engine and the built-in catalogs.
    pub fn new(engine: MockEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            models: Arc::new(ModelCatalog::builtin()),
            templates: Arc::new(RwLock::new(TemplateCatalog::builtin())),
        }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate))
        .route("/api/models", get(list_models))
        .route("/api/templates", get(list_templates).post(save_template))
        .with_state(state)
}

/// Wire shape of a generation request body.
///
/// Every field is optional so validation can answer with the canonical
/// message instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    model: Option<ModelRef>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    parameters: Option<GenerationParameters>,
}

/// The subset of a model descriptor a client must send.
#[derive(Debug, Deserialize)]
struct ModelRef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    provider: Option<String>,
}

/// Health check endpoint.
#[instrument(skip_all)]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the model catalog.
#[instrument(skip(state))]
pub async fn list_models(State(state): State<ApiState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "models": state.models.models() })),
    )
}

/// Lists built-in and runtime-saved templates.
#[instrument(skip(state))]
pub async fn list_templates(State(state): State<ApiState>) -> (StatusCode, Json<Value>) {
    let templates = match state.templates.read() {
        Ok(catalog) => json!(catalog.templates()),
        Err(_) => {
            warn!("template catalog lock poisoned");
            return internal_error();
        }
    };
    (StatusCode::OK, Json(json!({ "templates": templates })))
}

/// Saves a template draft into the in-memory catalog.
#[instrument(skip(state, draft))]
pub async fn save_template(
    State(state): State<ApiState>,
    Json(draft): Json<TemplateDraft>,
) -> (StatusCode, Json<Value>) {
    let template = match draft.into_template(Uuid::new_v4().to_string(), Utc::now()) {
        Ok(template) => template,
        Err(err) => {
            let message = match err.kind {
                GenerationErrorKind::TemplateDraft(msg) => msg,
                other => other.to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message })));
        }
    };
    match state.templates.write() {
        Ok(mut catalog) => catalog.insert(template.clone()),
        Err(_) => {
            warn!("template catalog lock poisoned");
            return internal_error();
        }
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "template": template })),
    )
}

/// Runs the mock engine for a generation request.
#[instrument(skip(state, body))]
pub async fn generate(
    State(state): State<ApiState>,
    Json(body): Json<GenerateBody>,
) -> (StatusCode, Json<Value>) {
    let request = match into_request(&state, body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.engine.generate(&request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "response": {
                    "content": result.content(),
                    "metadata": result.metadata(),
                },
            })),
        ),
        Err(MaquetteError::Validation(err)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": err.message })))
        }
        Err(err) => {
            warn!(error = %err, "generation failed");
            internal_error()
        }
    }
}

/// Builds an engine request from a wire body.
///
/// Known model names resolve through the catalog; unknown names become
/// ad-hoc descriptors. Field presence is left to the engine's validation
/// so the canonical message has a single source.
fn into_request(
    state: &ApiState,
    body: GenerateBody,
) -> Result<GenerationRequest, (StatusCode, Json<Value>)> {
    let (name, provider) = match body.model {
        Some(model) => (
            model.name.unwrap_or_default(),
            model.provider.unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    let model = state
        .models
        .find_by_name(&name)
        .cloned()
        .unwrap_or_else(|| ModelDescriptor::adhoc(name, provider));

    GenerationRequest::builder()
        .model(model)
        .prompt(body.prompt.unwrap_or_default())
        .parameters(body.parameters.unwrap_or_default())
        .build()
        .map_err(|err| {
            warn!(error = %err, "failed to assemble request");
            internal_error()
        })
}

fn internal_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to generate response" })),
    )
}
