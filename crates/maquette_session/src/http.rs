//! HTTP-backed generator for the playground server's JSON API.

use maquette_core::{GenerationRequest, GenerationResult, Generator, ResponseMetadata};
use maquette_error::{MaquetteError, TransportError, ValidationError};
use serde::Deserialize;
use tracing::{debug, instrument};

/// A [`Generator`] that posts requests to a remote playground server.
///
/// Maps 400 responses back to [`ValidationError`] with the server's
/// message and everything else that is not a success envelope to
/// [`TransportError`].
pub struct HttpGenerator {
    client: reqwest::Client,
    base_url: String,
}

/// Success envelope of the generation exchange.
#[derive(Debug, Deserialize)]
struct GenerateEnvelope {
    success: bool,
    response: ResponsePayload,
}

#[derive(Debug, Deserialize)]
struct ResponsePayload {
    content: String,
    metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpGenerator {
    /// Creates a generator targeting the given server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl Generator for HttpGenerator {
    #[instrument(skip_all, fields(endpoint = %self.endpoint()))]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, MaquetteError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| TransportError::new(format!("Malformed error body: {}", e)))?;
            return Err(ValidationError::new(body.error).into());
        }
        if !status.is_success() {
            return Err(TransportError::new(format!("Server returned {}", status)).into());
        }

        let envelope: GenerateEnvelope = response
            .json()
            .await
            .map_err(|e| TransportError::new(format!("Malformed success body: {}", e)))?;
        if !envelope.success {
            return Err(TransportError::new("Server reported failure").into());
        }

        debug!("generation round trip complete");
        Ok(GenerationResult::new(
            envelope.response.content,
            envelope.response.metadata,
        ))
    }
}
