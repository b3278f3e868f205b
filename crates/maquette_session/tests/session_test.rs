use chrono::Utc;
use maquette_core::{
    FinishReason, GenerationParameters, GenerationRequest, GenerationResult, Generator,
    ModelCatalog, ResponseMetadata, TemplateCatalog,
};
use maquette_error::{MaquetteError, TransportError};
use maquette_session::{Session, SessionPhase};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Generator stub that records how many times it was invoked.
struct CountingGenerator {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingGenerator {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Generator for CountingGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, MaquetteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TransportError::new("stub transport down").into());
        }
        let metadata = ResponseMetadata::builder()
            .model(request.model().name().clone())
            .provider(request.model().provider().clone())
            .tokens(42u32)
            .temperature(*request.parameters().temperature())
            .max_tokens(*request.parameters().max_tokens())
            .finish_reason(FinishReason::Stop)
            .timestamp(Utc::now())
            .build()
            .unwrap();
        Ok(GenerationResult::new("stub content", metadata))
    }
}

fn session() -> Session {
    Session::new(&ModelCatalog::builtin())
}

#[tokio::test]
async fn empty_prompt_never_dispatches() {
    let generator = CountingGenerator::ok();
    let mut session = session();

    assert!(!session.generate(&generator).await);
    assert_eq!(generator.calls(), 0);
    assert_eq!(*session.phase(), SessionPhase::Idle);
    assert!(session.result().is_none());
}

#[test]
fn begin_while_generating_is_inert() {
    let mut session = session();
    session.set_prompt("first");

    let request = session.begin().expect("first trigger dispatches");
    assert_eq!(request.prompt(), "first");
    assert!(session.is_generating());

    // Second trigger while in flight: no transition, no request.
    session.set_prompt("second");
    assert!(session.begin().is_none());
    assert!(session.is_generating());
    assert!(session.result().is_none());
}

#[test]
fn begin_clears_the_previous_result_at_dispatch() {
    let mut session = session();
    session.set_prompt("one");
    let req = session.begin().unwrap();
    session.complete(GenerationResult::new(
        "old",
        ResponseMetadata::builder()
            .model(req.model().name().clone())
            .provider(req.model().provider().clone())
            .tokens(10u32)
            .temperature(0.7f32)
            .max_tokens(1500u32)
            .finish_reason(FinishReason::Stop)
            .timestamp(Utc::now())
            .build()
            .unwrap(),
    ));
    assert!(session.result().is_some());

    session.set_prompt("two");
    session.begin().unwrap();
    // Superseded at dispatch, not at completion.
    assert!(session.result().is_none());
}

#[tokio::test]
async fn success_stores_result_and_returns_to_idle() {
    let generator = CountingGenerator::ok();
    let mut session = session();
    session.set_prompt("Explain recursion");

    assert!(session.generate(&generator).await);
    assert_eq!(generator.calls(), 1);
    assert_eq!(*session.phase(), SessionPhase::Idle);
    let result = session.result().as_ref().unwrap();
    assert_eq!(result.content(), "stub content");
    assert!(session.can_generate());
}

#[tokio::test]
async fn failure_stores_fallback_and_returns_to_idle() {
    let generator = CountingGenerator::failing();
    let mut session = session();
    session.set_prompt("doomed");

    assert!(session.generate(&generator).await);
    assert_eq!(*session.phase(), SessionPhase::Idle);
    let result = session.result().as_ref().unwrap();
    assert!(result.content().contains("there was an error"));
    assert_eq!(*result.metadata().tokens(), 0);
}

#[test]
fn apply_template_overwrites_prompt_and_parameters() {
    let templates = TemplateCatalog::builtin();
    let brainstorm = templates.find("brainstorm").unwrap();

    let mut session = session();
    session.set_prompt("stale prompt");
    session.set_parameters(GenerationParameters::new(0.1, 64).unwrap());

    session.apply_template(brainstorm);
    assert_eq!(session.prompt(), brainstorm.prompt());
    assert_eq!(session.parameters(), brainstorm.parameters());
    assert_eq!(*session.phase(), SessionPhase::Idle);
}

#[test]
fn apply_template_is_legal_while_generating() {
    let templates = TemplateCatalog::builtin();
    let summarize = templates.find("summarize").unwrap();

    let mut session = session();
    session.set_prompt("in flight");
    session.begin().unwrap();

    session.apply_template(summarize);
    assert!(session.is_generating());
    assert_eq!(session.prompt(), summarize.prompt());
    assert!(session.result().is_none());
}

#[test]
fn model_selection_starts_at_catalog_default() {
    let catalog = ModelCatalog::builtin();
    let mut session = Session::new(&catalog);
    assert_eq!(session.selected_model().id(), "gpt-4-turbo");

    let claude = catalog.find("claude-3-opus").unwrap().clone();
    session.select_model(claude);
    assert_eq!(session.selected_model().provider(), "Anthropic");
}
