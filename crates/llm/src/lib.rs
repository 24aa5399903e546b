//! Moment LLM Integration
//!
//! 외부 텍스트 생성 모델(Ollama) 클라이언트와 프롬프트 템플릿.
//! 생성기는 언제나 선택 사항이며, 실패는 `None`으로만 드러난다.

mod client;
mod generator;
mod llm_trait;
mod prompts;
mod types;

pub use client::OllamaClient;
pub use generator::LlmGenerator;
pub use llm_trait::{LlmClient, TextGenerator};
pub use prompts::{highlight_prompt, tag_prompt, TAG_INSTRUCTION};
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse};
