use crate::core::normalize::normalize_tag;

/// Minimum normalized length for substring containment to count as a match
const MIN_CONTAINMENT_LEN: usize = 3;

/// Canonical category key and the normalized tokens treated as equivalent to it
pub static SYNONYMS: &[(&str, &[&str])] = &[
    ("ecommerce", &["ecommerce", "retail"]),
    ("technology", &["tech", "software", "saas"]),
    ("finance", &["fintech", "financial", "crypto", "cryptocurrency"]),
    ("health", &["healthcare", "wellness", "fitness", "mentalhealth"]),
    ("education", &["learning", "training", "course"]),
    ("marketing", &["advertising", "promotion", "growth"]),
    ("business", &["enterprise", "corporate", "b2b"]),
    ("entertainment", &["gaming", "music", "media"]),
    ("lifestyle", &["lifestyle", "life", "personal"]),
    ("productivity", &["productivity", "efficiency", "tools"]),
    ("ai", &["ai", "artificialintelligence", "machinelearning", "ml"]),
    ("saas", &["saas", "software", "technology"]),
    ("design", &["design", "creative", "ui", "ux"]),
    ("development", &["development", "dev", "programming", "coding"]),
    ("crypto", &["crypto", "cryptocurrency", "blockchain", "finance"]),
    ("sales", &["sales", "business", "marketing"]),
    ("food", &["food", "restaurant", "culinary", "cooking"]),
    ("fashion", &["fashion", "style", "apparel", "clothing"]),
    ("travel", &["travel", "tourism", "vacation", "trip"]),
    ("gaming", &["gaming", "games", "entertainment", "esports"]),
];

/// Check whether two free-text tags describe the same category
///
/// Rules, first hit wins:
/// 1. Normalized tokens are equal
/// 2. One token contains the other and both are at least 3 characters long
/// 3. Both tokens sit in the same synonym list, or one is a synonym key and
///    the other is in that key's list
///
/// Rule 2 is a plain substring test, so `"art"` matches `"smartphones"`.
pub fn tags_match(a: &str, b: &str) -> bool {
    let a = normalize_tag(a);
    let b = normalize_tag(b);

    if a == b {
        return true;
    }

    if (a.contains(b.as_str()) || b.contains(a.as_str()))
        && a.len() >= MIN_CONTAINMENT_LEN
        && b.len() >= MIN_CONTAINMENT_LEN
    {
        return true;
    }

    synonyms_match(&a, &b)
}

#[inline]
fn synonyms_match(a: &str, b: &str) -> bool {
    SYNONYMS.iter().any(|(key, variants)| {
        let has_a = variants.contains(&a);
        let has_b = variants.contains(&b);

        (has_a && has_b) || (a == *key && has_b) || (b == *key && has_a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_after_normalization() {
        assert!(tags_match("E-Commerce", "ecommerce"));
        assert!(tags_match("AI/ML", "ai"));
    }

    #[test]
    fn test_substring_needs_three_chars() {
        assert!(tags_match("Technology", "Tech"));
        assert!(tags_match("art", "Smartphones"));
        // "ai" is too short for containment and has no synonym link to "retail"
        assert!(!tags_match("AI", "Retail"));
    }

    #[test]
    fn test_synonym_key_and_variant() {
        assert!(tags_match("SaaS", "Technology"));
        assert!(tags_match("Finance", "Crypto"));
        assert!(tags_match("UX", "Design"));
        assert!(tags_match("ML", "AI"));
    }

    #[test]
    fn test_synonym_shared_list() {
        // both listed under "ecommerce"
        assert!(tags_match("Retail", "E-commerce"));
        // both listed under "crypto"
        assert!(tags_match("Blockchain", "Cryptocurrency"));
    }

    #[test]
    fn test_unrelated_tags() {
        assert!(!tags_match("Fashion", "Finance"));
        assert!(!tags_match("Travel", "Gaming"));
        assert!(!tags_match("Health", "Sales"));
    }

    #[test]
    fn test_symmetry_over_table() {
        let tokens: Vec<&str> = SYNONYMS
            .iter()
            .flat_map(|(key, variants)| std::iter::once(*key).chain(variants.iter().copied()))
            .chain(["AI/ML", "Tech", "", "x", "Smartphones"])
            .collect();

        for a in &tokens {
            for b in &tokens {
                assert_eq!(tags_match(a, b), tags_match(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }
}
