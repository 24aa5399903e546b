use async_trait::async_trait;
use moment_common::Result;

use crate::types::GenerateRequest;

/// Common trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, request: GenerateRequest) -> Result<String>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}

/// Best-effort text generation capability.
///
/// Implementations swallow every failure and report it as `None`; callers
/// always have a deterministic path to fall back to.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn try_generate(&self, prompt: &str) -> Option<String>;
}
