//! Prompt template types.

use crate::GenerationParameters;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use maquette_error::{GenerationError, GenerationErrorKind};
use serde::{Deserialize, Serialize};

/// A named, reusable (prompt, parameters) pair loadable into the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable identifier
    id: String,
    /// Display name
    name: String,
    /// Short description for selection UIs
    description: String,
    /// The preset prompt text
    prompt: String,
    /// The preset parameters
    parameters: GenerationParameters,
    /// Creation time, set for templates saved at runtime
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Creates a built-in catalog template.
    pub fn builtin(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        prompt: impl Into<String>,
        parameters: GenerationParameters,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            prompt: prompt.into(),
            parameters,
            created_at: None,
        }
    }
}

/// An unsaved template submitted by a client.
///
/// Missing description defaults to the empty string and missing parameters
/// to the editor defaults when the draft is materialized.
///
/// # Examples
///
/// ```
/// use maquette_core::TemplateDraft;
/// use chrono::Utc;
///
/// let draft = TemplateDraft::new("Recap", None, "Summarize this thread", None);
/// let template = draft.into_template("t-1", Utc::now()).unwrap();
/// assert_eq!(template.description(), "");
/// assert_eq!(*template.parameters().max_tokens(), 1500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    /// Display name, required
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Preset prompt, required
    pub prompt: Option<String>,
    /// Optional parameters
    pub parameters: Option<GenerationParameters>,
}

impl TemplateDraft {
    /// Creates a draft from parts.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        prompt: impl Into<String>,
        parameters: Option<GenerationParameters>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description,
            prompt: Some(prompt.into()),
            parameters,
        }
    }

    /// Validates the draft and materializes it into a [`Template`].
    pub fn into_template(
        self,
        id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Template, GenerationError> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        let prompt = self.prompt.filter(|p| !p.trim().is_empty());
        let (Some(name), Some(prompt)) = (name, prompt) else {
            return Err(GenerationError::new(GenerationErrorKind::TemplateDraft(
                "Name and prompt are required".into(),
            )));
        };
        Ok(Template {
            id: id.into(),
            name,
            description: self.description.unwrap_or_default(),
            prompt,
            parameters: self.parameters.unwrap_or_default(),
            created_at: Some(created_at),
        })
    }
}
