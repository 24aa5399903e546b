use std::collections::HashSet;

/// Activity keywords, scanned in this order
pub const REFERENCE_KEYWORDS: [&str; 10] = [
    "체육", "해커톤", "프로젝트", "동아리", "수학여행", "공연", "축제", "졸업", "시험", "발표",
];

/// Used when no reference keyword occurs in the text
pub const DEFAULT_TAGS: [&str; 3] = ["일상", "친구", "기록"];

/// Upper bound on returned tags
pub const MAX_TAGS: usize = 5;

/// Separators accepted in generated tag lists (ASCII and full-width comma)
const TAG_SEPARATORS: [char; 2] = [',', '，'];

/// Rule-based tags: every reference keyword found in `text`, or the default triple
pub fn simple_tags(text: &str) -> Vec<String> {
    let found: Vec<String> = REFERENCE_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    if found.is_empty() {
        return DEFAULT_TAGS.iter().map(|t| t.to_string()).collect();
    }

    finalize_tags(found)
}

/// Split generator output into tags.
///
/// `"#해커톤, 프로젝트 ,, #팀워크"` becomes `["해커톤", "프로젝트", "팀워크"]`.
pub fn parse_generated_tags(output: &str) -> Vec<String> {
    output
        .split(&TAG_SEPARATORS[..])
        .map(|token| token.trim().trim_start_matches('#').trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Drop empties, deduplicate keeping first occurrence, cap at [`MAX_TAGS`]
pub fn finalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_in_reference_order() {
        // 발표 appears before 체육 in the text but after it in the keyword list
        let tags = simple_tags("발표 준비하다가 체육 시간");
        assert_eq!(tags, vec!["체육", "발표"]);
    }

    #[test]
    fn test_default_tags_when_nothing_matches() {
        assert_eq!(simple_tags(""), vec!["일상", "친구", "기록"]);
        assert_eq!(simple_tags("그냥 평범한 하루"), vec!["일상", "친구", "기록"]);
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(simple_tags("체육대회"), vec!["체육"]);
    }

    #[test]
    fn test_at_most_five_tags() {
        let text = REFERENCE_KEYWORDS.join(" ");
        let tags = simple_tags(&text);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags, REFERENCE_KEYWORDS[..5].to_vec());
    }

    #[test]
    fn test_parse_generated_tags() {
        assert_eq!(
            parse_generated_tags("#해커톤, 프로젝트 ,, #팀워크"),
            vec!["해커톤", "프로젝트", "팀워크"]
        );
        assert_eq!(parse_generated_tags("축제，공연"), vec!["축제", "공연"]);
        assert_eq!(parse_generated_tags("##  졸업"), vec!["졸업"]);
    }

    #[test]
    fn test_parse_generated_tags_garbage() {
        assert!(parse_generated_tags("").is_empty());
        assert!(parse_generated_tags(" , # ,").is_empty());
        assert_eq!(parse_generated_tags("no commas here"), vec!["no commas here"]);
    }

    #[test]
    fn test_finalize_tags() {
        let tags = ["a", "b", "a", "", "c", "d", "b", "e", "f"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(finalize_tags(tags), vec!["a", "b", "c", "d", "e"]);
    }
}
