use std::collections::BTreeMap;

use crate::error::PipelineResult;
use crate::matching::brand::{BrandStrategy, BrandVocabulary};
use crate::matching::normalize::{Normalizer, is_alphabetic_only, is_only_alphanumeric};
use crate::matching::policy::MatchPolicy;
use crate::matching::rank::{rank_coarse, rank_refined};
use crate::matching::types::{
    BrandTaggedName, MatchOutcome, NormalizedCatalogEntry, NormalizedName, RawCatalogEntry,
    RawName,
};

/// Everything one match run produces, before export formatting.
#[derive(Debug)]
pub struct PipelineOutput {
    pub outcomes: Vec<MatchOutcome>,
    pub strategy: BrandStrategy,
}

/// Runs the full cascade over validated inputs: normalization, brand
/// vocabulary construction, brand tagging, the coarse pass and the
/// refined pass. Outcomes come back sorted by product id.
pub fn run_pipeline(
    names: &[RawName],
    catalog: &[RawCatalogEntry],
    brand_patterns: Option<&BTreeMap<String, String>>,
    policy: MatchPolicy,
) -> PipelineResult<PipelineOutput> {
    let normalizer = Normalizer::new()?;
    let normalized_catalog = normalize_catalog_entries(&normalizer, catalog);

    let vocabulary = match brand_patterns {
        Some(patterns) => BrandVocabulary::from_patterns(patterns, &normalized_catalog)?,
        None => BrandVocabulary::derive(&normalized_catalog, policy),
    };

    let mut outcomes: Vec<MatchOutcome> = names
        .iter()
        .map(|raw| {
            let name = normalize_name(&normalizer, raw);
            let tagged = BrandTaggedName {
                possible_brand: vocabulary.tag(&name.clean_name),
                name,
            };
            MatchOutcome {
                coarse: rank_coarse(&tagged.name, &normalized_catalog),
                refined: rank_refined(&tagged, &normalized_catalog, policy),
                name: tagged,
            }
        })
        .collect();

    outcomes.sort_by_key(|outcome| outcome.name.name.product_id);

    Ok(PipelineOutput {
        outcomes,
        strategy: vocabulary.strategy(),
    })
}

fn normalize_name(normalizer: &Normalizer, raw: &RawName) -> NormalizedName {
    let clean_name = normalizer.clean(&raw.product_name);
    NormalizedName {
        product_id: raw.product_id,
        product_name: raw.product_name.clone(),
        clean_name_alphanum: normalizer.alphanumeric_only(&clean_name),
        clean_name_non_formula: normalizer.non_formula_prefix(&clean_name),
        clean_name_formula: normalizer.formula(&clean_name),
        // Flags describe the raw input, not the cleaned form.
        is_only_alphanumeric: is_only_alphanumeric(&raw.product_name),
        is_alphabetic_only: is_alphabetic_only(&raw.product_name),
        clean_name,
    }
}

pub(crate) fn normalize_catalog_entries(
    normalizer: &Normalizer,
    catalog: &[RawCatalogEntry],
) -> Vec<NormalizedCatalogEntry> {
    catalog
        .iter()
        .map(|entry| normalize_catalog_entry(normalizer, entry))
        .collect()
}

fn normalize_catalog_entry(
    normalizer: &Normalizer,
    entry: &RawCatalogEntry,
) -> NormalizedCatalogEntry {
    let clean_sku = normalizer.clean(&entry.product_sku);
    // Brands compare against cleaned text, so they drop to lowercase
    // and lose internal spaces up front.
    let brand: String = entry
        .brand
        .to_lowercase()
        .chars()
        .filter(|character| *character != ' ')
        .collect();
    NormalizedCatalogEntry {
        sku_id: entry.sku_id,
        product_sku: entry.product_sku.clone(),
        brand,
        product_type: entry.product_type.to_lowercase(),
        formula: entry.formula.clone(),
        clean_sku_alphanum: normalizer.alphanumeric_only(&clean_sku),
        clean_sku,
    }
}
