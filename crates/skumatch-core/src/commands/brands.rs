use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{BrandVocabularyData, BrandVocabularyEntry};
use crate::error::PipelineResult;
use crate::ingest;
use crate::matching::brand::BrandVocabulary;
use crate::matching::normalize::Normalizer;
use crate::matching::pipeline::normalize_catalog_entries;
use crate::matching::policy::MATCH_POLICY_V1;

#[derive(Debug, Default)]
pub struct BrandsOptions {
    pub catalog_path: String,
    pub brand_patterns_path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(
    catalog_path: String,
    brand_patterns_path: Option<String>,
) -> PipelineResult<SuccessEnvelope> {
    run_with_options(BrandsOptions {
        catalog_path,
        brand_patterns_path,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: BrandsOptions) -> PipelineResult<SuccessEnvelope> {
    let catalog = ingest::load_catalog(&options.catalog_path, options.stdin_override)?;

    let normalizer = Normalizer::new()?;
    let normalized = normalize_catalog_entries(&normalizer, &catalog.rows);

    let vocabulary = match &options.brand_patterns_path {
        Some(path) => {
            let patterns = super::load_brand_patterns(path)?;
            BrandVocabulary::from_patterns(&patterns, &normalized)?
        }
        None => BrandVocabulary::derive(&normalized, MATCH_POLICY_V1),
    };

    let brands = vocabulary
        .entries()
        .into_iter()
        .map(|(brand, tokens, pattern)| BrandVocabularyEntry {
            brand,
            tokens,
            pattern,
        })
        .collect();

    let data = BrandVocabularyData {
        strategy: vocabulary.strategy().as_str().to_string(),
        catalog_read: catalog.read,
        catalog_dropped: catalog.dropped,
        brands,
    };

    SuccessEnvelope::for_command("brands", data)
}
