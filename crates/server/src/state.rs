use chrono::{DateTime, Utc};
use moment_analysis::{HighlightSummarizer, TagAndMentionExtractor};
use moment_common::AppConfig;
use moment_llm::TextGenerator;
use std::sync::Arc;

/// Shared application state, immutable after startup
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Tag and mention extraction for `/ai/suggest`
    pub extractor: TagAndMentionExtractor,

    /// Highlight sentences for `/ai/highlight`
    pub summarizer: HighlightSummarizer,

    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Both components share the same optional generator
    pub fn new(config: AppConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            config,
            extractor: TagAndMentionExtractor::new(generator.clone()),
            summarizer: HighlightSummarizer::new(generator),
            started_at: Utc::now(),
        }
    }

    pub fn generator_enabled(&self) -> bool {
        self.extractor.has_generator()
    }
}
