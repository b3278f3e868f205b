//! Static catalogs of models and prompt templates.
//!
//! Both catalogs are built once at process start and shared by reference;
//! entries are never recreated per request.

use crate::{GenerationParameters, ModelDescriptor, ModelPricing, Template};
use serde::{Deserialize, Serialize};

/// The fixed list of selectable models.
///
/// # Examples
///
/// ```
/// use maquette_core::ModelCatalog;
///
/// let catalog = ModelCatalog::builtin();
/// assert_eq!(catalog.models().len(), 6);
/// assert!(catalog.find("gpt-4").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    /// The built-in model list.
    pub fn builtin() -> Self {
        let models = vec![
            ModelDescriptor::new(
                "gpt-4-turbo",
                "GPT-4 Turbo",
                "Most capable model with improved performance",
                "OpenAI",
                128_000,
                ModelPricing::new(0.01, 0.03),
            ),
            ModelDescriptor::new(
                "gpt-4",
                "GPT-4",
                "High-quality responses for complex tasks",
                "OpenAI",
                8_192,
                ModelPricing::new(0.03, 0.06),
            ),
            ModelDescriptor::new(
                "gpt-3.5-turbo",
                "GPT-3.5 Turbo",
                "Fast and efficient for most tasks",
                "OpenAI",
                4_096,
                ModelPricing::new(0.001, 0.002),
            ),
            ModelDescriptor::new(
                "claude-3-opus",
                "Claude 3 Opus",
                "Anthropic's most capable model",
                "Anthropic",
                200_000,
                ModelPricing::new(0.015, 0.075),
            ),
            ModelDescriptor::new(
                "claude-3-sonnet",
                "Claude 3 Sonnet",
                "Balanced performance and speed",
                "Anthropic",
                200_000,
                ModelPricing::new(0.003, 0.015),
            ),
            ModelDescriptor::new(
                "gemini-pro",
                "Gemini Pro",
                "Google's advanced language model",
                "Google",
                32_768,
                ModelPricing::new(0.0005, 0.0015),
            ),
        ];
        Self { models }
    }

    /// All catalog entries, in display order.
    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// The default selection (first entry).
    pub fn default_model(&self) -> &ModelDescriptor {
        &self.models[0]
    }

    /// Looks up a model by id.
    pub fn find(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id() == id)
    }

    /// Looks up a model by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.name() == name)
    }
}

/// The prompt template catalog: built-in presets plus templates saved at
/// runtime. Saved templates live in process memory only.
///
/// # Examples
///
/// ```
/// use maquette_core::TemplateCatalog;
///
/// let catalog = TemplateCatalog::builtin();
/// let preset = catalog.find("explain-concept").unwrap();
/// assert!(preset.prompt().contains("Explain"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The built-in preset list.
    pub fn builtin() -> Self {
        let default = GenerationParameters::default();
        let templates = vec![
            Template::builtin(
                "explain-concept",
                "Explain a Concept",
                "Clear, structured explanation of a technical topic",
                "Explain the following concept in simple terms, with an example: ",
                default,
            ),
            Template::builtin(
                "code-review",
                "Code Review",
                "Focused review feedback on a code snippet",
                "Review the following code and point out bugs, style issues, and possible improvements:\n\n",
                GenerationParameters::new(0.2, 2000).expect("valid preset"),
            ),
            Template::builtin(
                "summarize",
                "Summarize Text",
                "Condense a passage into key points",
                "Summarize the following text into five bullet points:\n\n",
                GenerationParameters::new(0.3, 800).expect("valid preset"),
            ),
            Template::builtin(
                "brainstorm",
                "Brainstorm Ideas",
                "Open-ended idea generation",
                "Brainstorm ten creative ideas for: ",
                GenerationParameters::new(0.9, 1200).expect("valid preset"),
            ),
        ];
        Self { templates }
    }

    /// All templates, built-ins first.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by id.
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id() == id)
    }

    /// Appends a runtime-saved template.
    pub fn insert(&mut self, template: Template) {
        self.templates.push(template);
    }
}
