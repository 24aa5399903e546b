//! Prompt templates for tag extraction and highlight summaries

/// Instruction prefix for activity tag extraction
pub const TAG_INSTRUCTION: &str =
    "다음 글에서 활동 태그 3~5개를 한국어 단어로만 뽑아라. 쉼표로만 구분해서 출력:";

/// Prompt for activity tag extraction
pub fn tag_prompt(text: &str) -> String {
    format!("{}\n{}", TAG_INSTRUCTION, text)
}

/// Prompt for a one-sentence highlight summary
pub fn highlight_prompt(base: &str, date: &str) -> String {
    format!("다음 정보를 한 문장 한국어로 요약해줘:\n{}\n날짜:{}", base, date)
}
