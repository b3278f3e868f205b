//! Generation parameter types.

use derive_getters::Getters;
use maquette_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Tuning knobs copied into each generation request.
///
/// Temperature must lie in `[0.0, 1.0]` and the token cap must be positive;
/// use [`GenerationParameters::new`] to enforce both.
///
/// # Examples
///
/// ```
/// use maquette_core::GenerationParameters;
///
/// let params = GenerationParameters::new(0.9, 1500).unwrap();
/// assert_eq!(*params.temperature(), 0.9);
///
/// assert!(GenerationParameters::new(1.5, 1500).is_err());
/// assert!(GenerationParameters::new(0.5, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    /// Randomness control in `[0.0, 1.0]`
    temperature: f32,
    /// Output length cap, strictly positive
    max_tokens: u32,
}

impl GenerationParameters {
    /// Creates validated parameters.
    pub fn new(temperature: f32, max_tokens: u32) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ValidationError::new(format!(
                "Temperature must be between 0.0 and 1.0, got {}",
                temperature
            )));
        }
        if max_tokens == 0 {
            return Err(ValidationError::new("Max tokens must be greater than zero"));
        }
        Ok(Self {
            temperature,
            max_tokens,
        })
    }
}

impl Default for GenerationParameters {
    /// The editor defaults: temperature 0.7, 1500-token cap.
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}
