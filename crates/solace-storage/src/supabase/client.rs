use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use solace_core::config::VectorStoreConfig;
use solace_core::errors::{SearchError, SolaceResult};
use solace_core::models::Document;
use solace_core::traits::IVectorSearch;
use tracing::debug;

use crate::row::{parse_row, row_to_document};

const BACKEND_NAME: &str = "supabase";

#[derive(Debug, Serialize)]
struct MatchRequest<'a> {
    query_embedding: &'a [f32],
    match_threshold: f64,
    match_count: usize,
}

/// Calls `POST {url}/rest/v1/rpc/{match_function}`.
///
/// The function is expected to return rows of
/// `{id?, content, metadata, similarity}` already ordered by similarity.
pub struct SupabaseVectorClient {
    client: reqwest::Client,
    rpc_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl SupabaseVectorClient {
    pub fn from_config(config: &VectorStoreConfig) -> SolaceResult<Self> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| unavailable("no url configured"))?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| unavailable("no api key configured"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| unavailable(&e.to_string()))?;

        Ok(Self {
            client,
            rpc_url: format!(
                "{}/rest/v1/rpc/{}",
                url.trim_end_matches('/'),
                config.match_function
            ),
            api_key,
            timeout_ms: config.request_timeout_ms,
        })
    }

    /// Full RPC URL this client posts to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn transport_error(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout {
                backend: BACKEND_NAME.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            SearchError::RequestFailed {
                backend: BACKEND_NAME.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

fn unavailable(reason: &str) -> SearchError {
    SearchError::RequestFailed {
        backend: BACKEND_NAME.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl IVectorSearch for SupabaseVectorClient {
    async fn search(
        &self,
        embedding: &[f32],
        threshold: f64,
        k: usize,
    ) -> SolaceResult<Vec<Document>> {
        let body = MatchRequest {
            query_embedding: embedding,
            match_threshold: threshold,
            match_count: k,
        };

        let response = self
            .client
            .post(&self.rpc_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SearchError::RequestFailed {
                backend: BACKEND_NAME.to_string(),
                reason: format!("HTTP {status}: {text}"),
            }
            .into());
        }

        // PostgREST returns null for a function with no rows in some setups.
        // Rows are decoded one at a time so a single bad row is dropped
        // rather than failing the batch.
        let rows: Option<Vec<serde_json::Value>> =
            response
                .json()
                .await
                .map_err(|e| SearchError::InvalidResponse {
                    reason: e.to_string(),
                })?;
        let rows = rows.unwrap_or_default();
        let returned = rows.len();

        let mut docs: Vec<Document> = rows
            .into_iter()
            .filter_map(parse_row)
            .filter_map(row_to_document)
            .collect();
        docs.truncate(k);
        debug!(
            returned,
            kept = docs.len(),
            threshold,
            k,
            "supabase match rows converted"
        );
        Ok(docs)
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}
