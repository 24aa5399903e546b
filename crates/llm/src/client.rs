use async_trait::async_trait;
use moment_common::{MomentError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateRequest, GenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client; every request is bounded by `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(3)))
            .build()
            .map_err(|e| MomentError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("Ollama client initialized: {} (timeout {:?})", base_url, timeout);
        Ok(Self { base_url, client })
    }

    /// Single attempt to generate text. No retries: a failed call goes straight to the fallback.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?
            .error_for_status()
            .map_err(|e| MomentError::network(format!("Ollama API error: {}", e)))?;

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| MomentError::llm(format!("Failed to parse response: {}", e)))?;

        if result.response.trim().is_empty() {
            return Err(MomentError::llm("Empty response from Ollama"));
        }

        debug!("Received response from Ollama - Length: {}", result.response.len());
        Ok(result.response)
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Ok(response.status().is_success())
    }
}

fn map_reqwest_error(e: reqwest::Error) -> MomentError {
    if e.is_timeout() {
        MomentError::timeout(format!("Ollama request timed out: {}", e))
    } else {
        MomentError::network(format!("Failed to reach Ollama: {}", e))
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        OllamaClient::generate(self, &request).await
    }

    async fn test_connection(&self) -> Result<bool> {
        OllamaClient::test_connection(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        // Port 1 is never an Ollama server; the connection is refused immediately.
        let client = OllamaClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        assert!(client.test_connection().await.is_err());
    }
}
