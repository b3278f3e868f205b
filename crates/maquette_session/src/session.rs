//! The playground session state machine.

use chrono::Utc;
use derive_getters::Getters;
use maquette_core::{
    FinishReason, GenerationParameters, GenerationRequest, GenerationResult, Generator,
    ModelCatalog, ModelDescriptor, ResponseMetadata, Template,
};
use tracing::{debug, instrument, warn};

/// Fallback content stored when a dispatched generation fails.
const FALLBACK_MESSAGE: &str =
    "Sorry, there was an error generating the response. Please try again.";

/// Where a session is in its generation cycle.
///
/// Kept as an explicit enum rather than an `is_generating` boolean so the
/// phase and the current result cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No request in flight
    #[default]
    Idle,
    /// Exactly one request in flight
    Generating,
}

/// One UI session: the editable inputs, the phase, and the current result.
///
/// At most one generation is outstanding per session, enforced by the
/// phase guard in [`Session::begin`]. Sessions are independent of each
/// other and owned exclusively by their UI.
///
/// # Examples
///
/// ```
/// use maquette_core::ModelCatalog;
/// use maquette_session::Session;
///
/// let catalog = ModelCatalog::builtin();
/// let mut session = Session::new(&catalog);
/// assert!(!session.can_generate());
///
/// session.set_prompt("Explain recursion");
/// assert!(session.can_generate());
/// ```
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// The currently selected model
    selected_model: ModelDescriptor,
    /// The prompt under edit
    prompt: String,
    /// The tuning parameters under edit
    parameters: GenerationParameters,
    /// Where the session is in its generation cycle
    phase: SessionPhase,
    /// The current result; superseded at dispatch of the next request
    result: Option<GenerationResult>,
}

impl Session {
    /// Creates a session over the shared catalog, selecting its first model.
    pub fn new(catalog: &ModelCatalog) -> Self {
        Self {
            selected_model: catalog.default_model().clone(),
            prompt: String::new(),
            parameters: GenerationParameters::default(),
            phase: SessionPhase::default(),
            result: None,
        }
    }

    /// Replaces the prompt text.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Clears the prompt text.
    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
    }

    /// Replaces the tuning parameters.
    pub fn set_parameters(&mut self, parameters: GenerationParameters) {
        self.parameters = parameters;
    }

    /// Replaces the model selection. Catalog entries are never mutated.
    pub fn select_model(&mut self, model: ModelDescriptor) {
        self.selected_model = model;
    }

    /// Loads a template: overwrites prompt and parameters atomically.
    ///
    /// Legal in any phase; never touches the result or the phase.
    pub fn apply_template(&mut self, template: &Template) {
        self.prompt = template.prompt().clone();
        self.parameters = *template.parameters();
    }

    /// Whether the generate action is currently permitted.
    pub fn can_generate(&self) -> bool {
        self.phase == SessionPhase::Idle && !self.prompt.trim().is_empty()
    }

    /// Whether a request is in flight.
    pub fn is_generating(&self) -> bool {
        self.phase == SessionPhase::Generating
    }

    /// Attempts the Idle -> Generating transition.
    ///
    /// Returns the request to dispatch, or `None` when the prompt is empty
    /// or a request is already in flight - the trigger is inert, never
    /// queued. On success the previous result is cleared immediately; a
    /// new request invalidates it at dispatch, not at completion.
    pub fn begin(&mut self) -> Option<GenerationRequest> {
        if !self.can_generate() {
            debug!(phase = ?self.phase, "generate trigger ignored");
            return None;
        }
        self.result = None;
        self.phase = SessionPhase::Generating;
        Some(
            GenerationRequest::builder()
                .model(self.selected_model.clone())
                .prompt(self.prompt.clone())
                .parameters(self.parameters)
                .build()
                .expect("Valid GenerationRequest"),
        )
    }

    /// Completes the in-flight request with a result.
    pub fn complete(&mut self, result: GenerationResult) {
        self.result = Some(result);
        self.phase = SessionPhase::Idle;
    }

    /// Fails the in-flight request, storing a fallback result.
    ///
    /// The session always returns to Idle, success or failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        let metadata = ResponseMetadata::builder()
            .model(self.selected_model.name().clone())
            .provider(self.selected_model.provider().clone())
            .tokens(0u32)
            .temperature(*self.parameters.temperature())
            .max_tokens(*self.parameters.max_tokens())
            .finish_reason(FinishReason::Stop)
            .timestamp(Utc::now())
            .build()
            .expect("Valid ResponseMetadata");
        self.result = Some(GenerationResult::new(message.into(), metadata));
        self.phase = SessionPhase::Idle;
    }

    /// Runs one full generation cycle against the given generator.
    ///
    /// Returns whether a request was dispatched; an inert trigger (empty
    /// prompt or already generating) returns `false` without touching the
    /// generator.
    #[instrument(skip_all, fields(model = %self.selected_model.name()))]
    pub async fn generate(&mut self, generator: &dyn Generator) -> bool {
        let Some(request) = self.begin() else {
            return false;
        };
        match generator.generate(&request).await {
            Ok(result) => self.complete(result),
            Err(err) => {
                warn!(error = %err, "generation failed");
                self.fail(FALLBACK_MESSAGE);
            }
        }
        true
    }
}
