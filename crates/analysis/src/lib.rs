//! Moment text analysis
//!
//! 일기 제목/본문에서 활동 태그와 친구 멘션을 뽑고, 반응 수치로 하이라이트 문장을 만든다.
//! 규칙 기반 경로가 항상 기준이며, 외부 생성기는 있으면 쓰는 보강 수단이다.

mod extractor;
mod highlight;
mod mentions;
mod tags;
mod types;

pub use extractor::TagAndMentionExtractor;
pub use highlight::{HighlightSummarizer, DEFAULT_TITLE, SUMMARY_PREFIX};
pub use mentions::{find_mentions, MAX_MENTIONS};
pub use tags::{finalize_tags, parse_generated_tags, simple_tags, DEFAULT_TAGS, MAX_TAGS, REFERENCE_KEYWORDS};
pub use types::{AnalysisInput, AnalysisResult, HighlightInput, HighlightResult};
