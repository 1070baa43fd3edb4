use regex::Regex;

/// Splits field text into lowercase words for indexing. Single characters are
/// noise for fuzzy matching and are filtered out.
pub fn tokenize_text(text: &str) -> Vec<String> {
    let re = Regex::new(r"[a-z0-9]+").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() >= 2)
        .collect()
}

/// Splits a query string into lowercase tokens, trimming punctuation.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| word.len() >= 2)
        .collect()
}
