/// Reduce a tag to the token used for comparison
///
/// Lowercases, keeps only ASCII `a-z`/`0-9`, then folds AI/ML notations
/// (`"AI/ML"`, `"ai ml"`, `"AIML"`) down to `"ai"`.
///
/// # Examples
/// ```
/// use sponsordb_match::core::normalize_tag;
///
/// assert_eq!(normalize_tag("E-Commerce"), "ecommerce");
/// assert_eq!(normalize_tag("AI/ML"), "ai");
/// ```
pub fn normalize_tag(tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }

    let mut token: String = tag
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    // Each fold shortens the token by two, so this terminates; looping keeps
    // the result idempotent for inputs like "aiaimlml". Nested input costs
    // O(n^2) in the worst case, fine at tag lengths.
    while token.contains("aiml") {
        token = token.replace("aiml", "ai");
    }

    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_case_and_punctuation() {
        assert_eq!(normalize_tag("Mental Health"), "mentalhealth");
        assert_eq!(normalize_tag("B2B"), "b2b");
        assert_eq!(normalize_tag("  UI/UX! "), "uiux");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize_tag(""), "");
        assert_eq!(normalize_tag("!!!"), "");
        assert_eq!(normalize_tag("日本"), "");
    }

    #[test]
    fn test_ai_variants_fold() {
        for variant in ["AI/ML", "ai ml", "AIML", "ai", "Ai-Ml"] {
            assert_eq!(normalize_tag(variant), "ai", "variant {:?}", variant);
        }
    }

    #[test]
    fn test_nested_fold_is_idempotent() {
        let once = normalize_tag("aiaimlml");
        assert_eq!(once, "aiai");
        assert_eq!(normalize_tag(&once), once);
    }
}
