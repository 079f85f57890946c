//! Remote embeddings over an OpenAI/Azure-style HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solace_core::config::EmbeddingConfig;
use solace_core::errors::{EmbeddingError, SolaceResult};
use solace_core::traits::IEmbeddingProvider;
use tracing::debug;

const PROVIDER_NAME: &str = "http";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: Vec<&'a str>,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

/// Calls `POST {endpoint}` with `{"input": [...], "model": ...}` and an
/// `api-key` header, reading vectors from `data[*].embedding`.
pub struct HttpEmbeddingProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
    request_dimensions: bool,
    timeout_ms: u64,
}

impl HttpEmbeddingProvider {
    /// Build from config. Fails if endpoint or key is missing.
    pub fn from_config(config: &EmbeddingConfig) -> SolaceResult<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| EmbeddingError::ProviderUnavailable {
                provider: "http (no endpoint configured)".to_string(),
            })?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EmbeddingError::ProviderUnavailable {
                provider: "http (no api key configured)".to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| EmbeddingError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config.model.clone(),
            dimensions: config.dimensions,
            request_dimensions: config.request_dimensions,
            timeout_ms: config.request_timeout_ms,
        })
    }

    async fn request(&self, input: Vec<&str>) -> SolaceResult<Vec<Vec<f32>>> {
        let expected = input.len();
        let body = EmbeddingRequest {
            input,
            model: &self.model,
            dimensions: self.request_dimensions.then_some(self.dimensions),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("HTTP {status}: {}", truncate(&text, 200)),
            }
            .into());
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        let mut data = parsed.data;
        if data.len() != expected {
            return Err(EmbeddingError::InvalidResponse {
                reason: format!("expected {expected} embeddings, got {}", data.len()),
            }
            .into());
        }
        data.sort_by_key(|d| d.index);
        debug!(count = data.len(), model = %self.model, "remote embeddings received");
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn transport_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                provider: PROVIDER_NAME.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            EmbeddingError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl IEmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>> {
        let mut vectors = self.request(vec![text]).await?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InvalidResponse {
                reason: "empty data array".to_string(),
            }
            .into()
        })
    }

    async fn embed_batch(&self, texts: &[String]) -> SolaceResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts.iter().map(String::as_str).collect()).await
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
