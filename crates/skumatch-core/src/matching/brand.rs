use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::error::{PipelineError, PipelineResult};
use crate::matching::policy::{BRAND_TOKEN_OVERRIDES, MatchPolicy};
use crate::matching::types::NormalizedCatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandStrategy {
    DerivedTokens,
    Patterns,
}

impl BrandStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DerivedTokens => "derived_tokens",
            Self::Patterns => "patterns",
        }
    }
}

#[derive(Debug)]
struct BrandMatcher {
    brand: String,
    tokens: BTreeSet<String>,
    pattern: Option<Regex>,
}

/// The immutable brand vocabulary the tagger runs against. Built once
/// at startup and threaded through the pipeline; brands are kept in
/// sorted order so first-match tagging is deterministic.
#[derive(Debug)]
pub struct BrandVocabulary {
    strategy: BrandStrategy,
    brands: Vec<BrandMatcher>,
}

impl BrandVocabulary {
    /// Derives per-brand token sets from the catalog itself: every
    /// qualifying token (policy length/alphabetic filter) of every
    /// cleaned SKU of the brand, plus the configured override tokens.
    pub fn derive(catalog: &[NormalizedCatalogEntry], policy: MatchPolicy) -> Self {
        Self::derive_with_overrides(catalog, policy, &default_overrides())
    }

    pub fn derive_with_overrides(
        catalog: &[NormalizedCatalogEntry],
        policy: MatchPolicy,
        overrides: &BTreeMap<String, Vec<String>>,
    ) -> Self {
        let mut tokens_by_brand: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in catalog {
            let bucket = tokens_by_brand.entry(entry.brand.clone()).or_default();
            for token in entry.clean_sku.split_whitespace() {
                if policy.is_brand_token(token) {
                    bucket.insert(token.to_string());
                }
            }
        }

        for (brand, extra_tokens) in overrides {
            if let Some(bucket) = tokens_by_brand.get_mut(brand) {
                bucket.extend(extra_tokens.iter().cloned());
            }
        }

        let brands = tokens_by_brand
            .into_iter()
            .map(|(brand, tokens)| BrandMatcher {
                brand,
                tokens,
                pattern: None,
            })
            .collect();

        Self {
            strategy: BrandStrategy::DerivedTokens,
            brands,
        }
    }

    /// Builds the vocabulary from an externally supplied pattern map.
    /// Every catalog brand must have a pattern; a gap is fatal before
    /// any scoring work starts.
    pub fn from_patterns(
        patterns: &BTreeMap<String, String>,
        catalog: &[NormalizedCatalogEntry],
    ) -> PipelineResult<Self> {
        let catalog_brands: BTreeSet<String> =
            catalog.iter().map(|entry| entry.brand.clone()).collect();

        let missing: Vec<String> = catalog_brands
            .iter()
            .filter(|brand| !patterns.contains_key(*brand))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::brand_pattern_missing(missing));
        }

        let mut brands = Vec::with_capacity(catalog_brands.len());
        for brand in catalog_brands {
            let Some(raw_pattern) = patterns.get(&brand) else {
                continue;
            };
            let compiled = Regex::new(raw_pattern).map_err(|error| {
                PipelineError::brand_pattern_invalid(&brand, raw_pattern, &error.to_string())
            })?;
            brands.push(BrandMatcher {
                brand,
                tokens: BTreeSet::new(),
                pattern: Some(compiled),
            });
        }

        Ok(Self {
            strategy: BrandStrategy::Patterns,
            brands,
        })
    }

    pub fn strategy(&self) -> BrandStrategy {
        self.strategy
    }

    /// Tags a cleaned name with the first matching brand in sorted
    /// brand order, or None. Matching runs against the space-stripped
    /// clean name so brand tokens spanning token boundaries still hit.
    pub fn tag(&self, clean_name: &str) -> Option<String> {
        let compact: String = clean_name
            .chars()
            .filter(|character| *character != ' ')
            .collect();

        for matcher in &self.brands {
            let hit = match &matcher.pattern {
                Some(pattern) => pattern.is_match(&compact),
                None => matcher
                    .tokens
                    .iter()
                    .any(|token| compact.contains(token.as_str())),
            };
            if hit {
                return Some(matcher.brand.clone());
            }
        }
        None
    }

    /// Sorted (brand, tokens, pattern) view for reporting.
    pub fn entries(&self) -> Vec<(String, Vec<String>, Option<String>)> {
        self.brands
            .iter()
            .map(|matcher| {
                (
                    matcher.brand.clone(),
                    matcher.tokens.iter().cloned().collect(),
                    matcher.pattern.as_ref().map(|p| p.as_str().to_string()),
                )
            })
            .collect()
    }
}

pub fn default_overrides() -> BTreeMap<String, Vec<String>> {
    BRAND_TOKEN_OVERRIDES
        .iter()
        .map(|(brand, tokens)| {
            (
                (*brand).to_string(),
                tokens.iter().map(|token| (*token).to_string()).collect(),
            )
        })
        .collect()
}
