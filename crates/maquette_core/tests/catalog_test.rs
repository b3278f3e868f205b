use maquette_core::{GenerationParameters, ModelCatalog, TemplateCatalog, TemplateDraft};
use chrono::Utc;

#[test]
fn model_catalog_has_six_entries_with_pricing() {
    let catalog = ModelCatalog::builtin();
    assert_eq!(catalog.models().len(), 6);
    for model in catalog.models() {
        assert!(model.pricing().is_some(), "{} has no pricing", model.id());
        assert!(*model.context_length() > 0);
    }
}

#[test]
fn default_model_is_gpt_4_turbo() {
    let catalog = ModelCatalog::builtin();
    assert_eq!(catalog.default_model().id(), "gpt-4-turbo");
    assert_eq!(catalog.default_model().provider(), "OpenAI");
}

#[test]
fn find_by_name_matches_display_names() {
    let catalog = ModelCatalog::builtin();
    let claude = catalog.find_by_name("Claude 3 Opus").unwrap();
    assert_eq!(claude.id(), "claude-3-opus");
    assert!(catalog.find_by_name("claude-3-opus").is_none());
}

#[test]
fn template_catalog_lookup_and_insert() {
    let mut catalog = TemplateCatalog::builtin();
    let before = catalog.templates().len();

    let draft = TemplateDraft::new("Standup Notes", None, "Turn these notes into a standup update:", None);
    let template = draft.into_template("t-custom", Utc::now()).unwrap();
    catalog.insert(template);

    assert_eq!(catalog.templates().len(), before + 1);
    let saved = catalog.find("t-custom").unwrap();
    assert_eq!(saved.name(), "Standup Notes");
    assert_eq!(saved.description(), "");
    assert_eq!(*saved.parameters(), GenerationParameters::default());
    assert!(saved.created_at().is_some());
}

#[test]
fn draft_without_prompt_is_rejected() {
    let draft = TemplateDraft {
        name: Some("No prompt".into()),
        description: None,
        prompt: Some("   ".into()),
        parameters: None,
    };
    let err = draft.into_template("t-bad", Utc::now()).unwrap_err();
    assert!(err.to_string().contains("Name and prompt are required"));
}
