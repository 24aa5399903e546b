/// Upper bound on returned mentions
pub const MAX_MENTIONS: usize = 5;

/// Friend names that literally occur in `text`, in input order.
///
/// Empty names never match. Duplicate names are kept as given, so a name
/// listed twice is mentioned twice.
pub fn find_mentions<S: AsRef<str>>(text: &str, friend_names: &[S]) -> Vec<String> {
    friend_names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !name.is_empty() && text.contains(*name))
        .take(MAX_MENTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_input_order() {
        let mentions = find_mentions("홍길동이랑 이지원 만남", &["이지원", "김철수", "홍길동"]);
        assert_eq!(mentions, vec!["이지원", "홍길동"]);
    }

    #[test]
    fn test_empty_name_never_matches() {
        assert!(find_mentions("아무 글", &[""]).is_empty());
        assert!(find_mentions("", &["", "이지원"]).is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mentions = find_mentions("이지원과 산책", &["이지원", "이지원"]);
        assert_eq!(mentions, vec!["이지원", "이지원"]);
    }

    #[test]
    fn test_at_most_five_mentions() {
        let names = ["가", "나", "다", "라", "마", "바", "사"];
        let mentions = find_mentions("가나다라마바사", &names);
        assert_eq!(mentions, vec!["가", "나", "다", "라", "마"]);
    }

    #[test]
    fn test_accepts_owned_names() {
        let names = vec!["이지원".to_string()];
        assert_eq!(find_mentions("이지원", &names), vec!["이지원"]);
    }
}
