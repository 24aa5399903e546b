use moment_llm::{highlight_prompt, TextGenerator};
use std::sync::Arc;
use tracing::debug;

use crate::types::{HighlightInput, HighlightResult};

/// Title used when the entry has none
pub const DEFAULT_TITLE: &str = "오늘의 추억";

/// Lead-in of the rule-based summary
pub const SUMMARY_PREFIX: &str = "오늘 가장 반응이 뜨거웠던 순간: ";

/// Builds the one-sentence highlight for an entry
#[derive(Clone, Default)]
pub struct HighlightSummarizer {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl HighlightSummarizer {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn rule_based() -> Self {
        Self::default()
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn summarize(&self, input: &HighlightInput) -> HighlightResult {
        let title = input
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let likes = input.likes.unwrap_or(0);
        let comments = input.comments.unwrap_or(0);
        let date = input.date.as_deref().unwrap_or("");

        let base = format!("{} (좋아요 {}, 댓글 {})", title, likes, comments);

        if let Some(generator) = &self.generator {
            if let Some(output) = generator.try_generate(&highlight_prompt(&base, date)).await {
                let summary = output.trim().replace('\n', " ");
                if !summary.is_empty() {
                    return HighlightResult { summary };
                }
            }
            debug!("Highlight generation unavailable, using template");
        }

        HighlightResult {
            summary: format!("{}{} {}", SUMMARY_PREFIX, base, date).trim().to_string(),
        }
    }
}
