use chrono::{DateTime, Utc};
use moment_analysis::{AnalysisInput, HighlightInput};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// `/ai/suggest` request body.
///
/// Every field is optional and tolerant of wrong types; see the `lenient_*` helpers.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub friend_names: Vec<String>,
}

impl SuggestRequest {
    /// Parse a raw body; a missing or malformed body is an empty request
    pub fn from_body(body: &[u8]) -> Self {
        parse_or_default(body)
    }
}

impl From<SuggestRequest> for AnalysisInput {
    fn from(req: SuggestRequest) -> Self {
        AnalysisInput {
            title: req.title.unwrap_or_default(),
            body: req.body.unwrap_or_default(),
            friend_names: req.friend_names,
        }
    }
}

/// `/ai/highlight` request body
#[derive(Debug, Default, Deserialize)]
pub struct HighlightRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_int")]
    pub likes: Option<i64>,

    #[serde(default, deserialize_with = "lenient_int")]
    pub comments: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

impl HighlightRequest {
    pub fn from_body(body: &[u8]) -> Self {
        parse_or_default(body)
    }
}

impl From<HighlightRequest> for HighlightInput {
    fn from(req: HighlightRequest) -> Self {
        HighlightInput {
            title: req.title,
            likes: req.likes,
            comments: req.comments,
            date: req.date,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,

    /// Whether the external text generator is wired in
    pub generator: bool,

    pub version: &'static str,

    /// Generation model, when the generator is wired in
    pub model: Option<String>,

    pub started_at: DateTime<Utc>,
}

fn parse_or_default<T: for<'de> Deserialize<'de> + Default>(body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }

    match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Unparseable request body treated as empty: {}", e);
            T::default()
        }
    }
}

/// Strings only; anything else counts as absent
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Strings, or non-zero numbers rendered as text; zero counts as absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// Array entries that are strings; non-arrays give an empty list
fn lenient_string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Integer coercion: floats truncate, numeric strings parse, booleans are 1/0
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(coerce_int(&Value::deserialize(deserializer)?))
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
