use moment_llm::{tag_prompt, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info};

use crate::mentions::find_mentions;
use crate::tags::{finalize_tags, parse_generated_tags, simple_tags};
use crate::types::{AnalysisInput, AnalysisResult};

/// Derives activity tags and friend mentions from a diary entry
#[derive(Clone, Default)]
pub struct TagAndMentionExtractor {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl TagAndMentionExtractor {
    /// `generator` is only consulted for tags; mentions are always rule based
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Extractor without an external generator
    pub fn rule_based() -> Self {
        Self::default()
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn extract(&self, input: &AnalysisInput) -> AnalysisResult {
        let text = input.text();

        let tags = self.derive_tags(&text).await;
        let mentions = find_mentions(&text, &input.friend_names);

        debug!(
            "Extracted {} tags and {} mentions from {} chars",
            tags.len(),
            mentions.len(),
            text.chars().count()
        );

        AnalysisResult { tags, mentions }
    }

    async fn derive_tags(&self, text: &str) -> Vec<String> {
        if let Some(tags) = self.generated_tags(text).await {
            return tags;
        }
        simple_tags(text)
    }

    /// Tags from the generator, or `None` when the rule-based path must be used
    async fn generated_tags(&self, text: &str) -> Option<Vec<String>> {
        let generator = self.generator.as_ref()?;
        if text.is_empty() {
            return None;
        }

        let output = generator.try_generate(&tag_prompt(text)).await?;
        let tags = finalize_tags(parse_generated_tags(&output));

        if tags.is_empty() {
            info!("Generator output had no usable tags, falling back to keywords");
            return None;
        }

        Some(tags)
    }
}
