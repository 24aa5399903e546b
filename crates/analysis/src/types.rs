use serde::{Deserialize, Serialize};

/// Diary entry to analyze
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisInput {
    /// Entry title
    pub title: String,

    /// Entry body
    pub body: String,

    /// Candidate friend names, in the caller's order (duplicates allowed)
    pub friend_names: Vec<String>,
}

impl AnalysisInput {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        friend_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            friend_names: friend_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Trimmed title and body joined by a newline, trimmed again
    pub fn text(&self) -> String {
        format!("{}\n{}", self.title.trim(), self.body.trim())
            .trim()
            .to_string()
    }
}

/// Tags and mentions derived from an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Activity tags, deduplicated, at most five
    pub tags: Vec<String>,

    /// Friend names found in the text, at most five
    pub mentions: Vec<String>,
}

/// Engagement numbers of an entry; `None` fields take their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightInput {
    pub title: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub date: Option<String>,
}

impl HighlightInput {
    pub fn new(
        title: impl Into<String>,
        likes: i64,
        comments: i64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            likes: Some(likes),
            comments: Some(comments),
            date: Some(date.into()),
        }
    }
}

/// One-sentence highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_trimmed_parts() {
        let input = AnalysisInput::new("  해커톤 다녀옴 ", "\n이지원이랑 같이 했다  ", Vec::<String>::new());
        assert_eq!(input.text(), "해커톤 다녀옴\n이지원이랑 같이 했다");
    }

    #[test]
    fn test_text_of_empty_input_is_empty() {
        assert_eq!(AnalysisInput::default().text(), "");

        let title_only = AnalysisInput::new("축제", "", Vec::<String>::new());
        assert_eq!(title_only.text(), "축제");

        let body_only = AnalysisInput::new("", "시험 끝", Vec::<String>::new());
        assert_eq!(body_only.text(), "시험 끝");
    }

    #[test]
    fn test_result_serializes_to_wire_shape() {
        let result = AnalysisResult {
            tags: vec!["해커톤".to_string()],
            mentions: vec!["이지원".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"tags":["해커톤"],"mentions":["이지원"]}"#);
    }
}
