use std::collections::HashSet;

use strsim::{levenshtein, normalized_levenshtein};

use crate::matching::policy::MatchPolicy;

/// Levenshtein edit distance between two strings.
pub fn edit_distance(left: &str, right: &str) -> i64 {
    levenshtein(left, right) as i64
}

/// Symmetric similarity on a 0-100 scale, from the normalized
/// Levenshtein ratio. Two empty strings score 100.
pub fn fuzzy_ratio(left: &str, right: &str) -> i64 {
    (normalized_levenshtein(left, right) * 100.0).round() as i64
}

/// Number of whitespace tokens the two strings share.
pub fn count_common_tokens(left: &str, right: &str) -> i64 {
    let left_tokens: HashSet<&str> = left.split_whitespace().collect();
    let right_tokens: HashSet<&str> = right.split_whitespace().collect();
    left_tokens.intersection(&right_tokens).count() as i64
}

/// Whether any signal-bearing name token appears verbatim as a token
/// of the target string. Tokens below the policy length are skipped
/// unless allowlisted, stopwords never count.
pub fn any_signal_token_present(name: &str, target: &str, policy: MatchPolicy) -> bool {
    let target_tokens: HashSet<&str> = target.split_whitespace().collect();
    name.split_whitespace()
        .filter(|token| policy.is_signal_token(token))
        .any(|token| target_tokens.contains(token))
}
