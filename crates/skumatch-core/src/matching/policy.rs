/// Deterministic matching-policy identifier.
///
/// Emitted with every match run so threshold changes stay auditable
/// across result files produced at different times.
pub const MATCH_POLICY_VERSION: &str = "match/v1";

/// Name tokens that are too generic to count as evidence that a name
/// refers to a particular SKU.
pub const GENERIC_STOPWORDS: [&str; 1] = ["plus"];

/// Short tokens that are real brand codes and bypass the minimum
/// token length in the token-presence check.
pub const SHORT_TOKEN_ALLOWLIST: [&str; 1] = ["za"];

/// Extra brand tokens that the length/alphabetic filter would reject
/// but that are known abbreviations for a catalog brand. Domain
/// knowledge, not derivable from the catalog text.
pub const BRAND_TOKEN_OVERRIDES: [(&str, &[&str]); 1] = [("dgw/hextar", &["hx", "dgw"])];

/// v1 matching policy.
///
/// Thresholds mirror the established cascade: a refined candidate
/// from a different brand is only acceptable above the fuzzy floor.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub fuzzy_accept_threshold: i64,
    pub max_skippable_token_len: usize,
    pub min_brand_token_len: usize,
}

impl MatchPolicy {
    /// Whether a cross-brand candidate with this fuzzy ratio survives
    /// the brand-consistency filter.
    pub fn accepts_cross_brand(self, fuzzy_ratio: i64) -> bool {
        fuzzy_ratio >= self.fuzzy_accept_threshold
    }

    /// Whether a name token carries enough signal for the
    /// token-presence predicate.
    pub fn is_signal_token(self, token: &str) -> bool {
        if GENERIC_STOPWORDS.contains(&token) {
            return false;
        }
        if token.len() <= self.max_skippable_token_len {
            return SHORT_TOKEN_ALLOWLIST.contains(&token);
        }
        true
    }

    /// Whether a catalog token qualifies for the derived brand
    /// vocabulary.
    pub fn is_brand_token(self, token: &str) -> bool {
        token.len() >= self.min_brand_token_len
            && token.chars().all(|character| character.is_ascii_alphabetic())
    }
}

pub const MATCH_POLICY_V1: MatchPolicy = MatchPolicy {
    fuzzy_accept_threshold: 70,
    max_skippable_token_len: 2,
    min_brand_token_len: 4,
};
