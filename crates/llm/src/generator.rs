use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::llm_trait::{LlmClient, TextGenerator};
use crate::types::{GenerateOptions, GenerateRequest};

/// Adapts an [`LlmClient`] into a [`TextGenerator`].
///
/// Owns the model name, the sampling options and the time budget of a call.
/// Errors, timeouts and blank output all come back as `None`.
pub struct LlmGenerator<C> {
    client: C,
    model: String,
    options: GenerateOptions,
    timeout: Duration,
}

impl<C: LlmClient> LlmGenerator<C> {
    pub fn new(client: C, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            options: GenerateOptions::short_greedy(),
            timeout,
        }
    }

    /// Probe the backend; `false` on any error
    pub async fn is_available(&self) -> bool {
        match tokio::time::timeout(self.timeout, self.client.test_connection()).await {
            Ok(Ok(ok)) => ok,
            Ok(Err(e)) => {
                warn!("Text generator availability check failed: {}", e);
                false
            }
            Err(_) => {
                warn!("Text generator availability check timed out after {:?}", self.timeout);
                false
            }
        }
    }
}

#[async_trait]
impl<C: LlmClient> TextGenerator for LlmGenerator<C> {
    async fn try_generate(&self, prompt: &str) -> Option<String> {
        let request = GenerateRequest::new(self.model.clone(), prompt, self.options.clone());

        match tokio::time::timeout(self.timeout, self.client.generate(request)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
            Ok(Ok(_)) => {
                debug!("Text generator returned blank output");
                None
            }
            Ok(Err(e)) => {
                warn!("Text generation failed, using fallback: {}", e);
                None
            }
            Err(_) => {
                warn!("Text generation timed out after {:?}, using fallback", self.timeout);
                None
            }
        }
    }
}
