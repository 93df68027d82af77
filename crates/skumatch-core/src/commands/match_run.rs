use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{MatchRow, MatchRunData, MatchRunSummary};
use crate::error::PipelineResult;
use crate::export;
use crate::ingest;
use crate::matching::pipeline::run_pipeline;
use crate::matching::policy::{MATCH_POLICY_V1, MATCH_POLICY_VERSION};
use crate::matching::types::MatchOutcome;

const DEFAULT_OUT_PATH: &str = "matches.tsv";
const PREVIEW_ROW_CAP: usize = 20;

#[derive(Debug, Default)]
pub struct MatchRunOptions {
    pub names_path: String,
    pub catalog_path: String,
    pub out_path: Option<String>,
    pub brand_patterns_path: Option<String>,
    pub dry_run: bool,
    pub stdin_override: Option<String>,
}

pub fn run(
    names_path: String,
    catalog_path: String,
    out_path: Option<String>,
    brand_patterns_path: Option<String>,
    dry_run: bool,
) -> PipelineResult<SuccessEnvelope> {
    run_with_options(MatchRunOptions {
        names_path,
        catalog_path,
        out_path,
        brand_patterns_path,
        dry_run,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: MatchRunOptions) -> PipelineResult<SuccessEnvelope> {
    ingest::reject_double_stdin(&options.names_path, &options.catalog_path)?;

    let (names_stdin, catalog_stdin) = if options.names_path == "-" {
        (options.stdin_override.clone(), None)
    } else {
        (None, options.stdin_override.clone())
    };

    let names = ingest::load_names(&options.names_path, names_stdin)?;
    let catalog = ingest::load_catalog(&options.catalog_path, catalog_stdin)?;

    let patterns = match &options.brand_patterns_path {
        Some(path) => Some(super::load_brand_patterns(path)?),
        None => None,
    };

    let output = run_pipeline(
        &names.rows,
        &catalog.rows,
        patterns.as_ref(),
        MATCH_POLICY_V1,
    )?;

    let rows: Vec<MatchRow> = output.outcomes.iter().map(to_match_row).collect();
    let matched = rows.iter().filter(|row| row.matched_sku.is_some()).count() as i64;

    let output_path = if options.dry_run {
        None
    } else {
        Some(
            options
                .out_path
                .unwrap_or_else(|| DEFAULT_OUT_PATH.to_string()),
        )
    };
    if let Some(path) = &output_path {
        export::write_match_rows(path, &rows)?;
    }

    let preview_truncated = rows.len() > PREVIEW_ROW_CAP;
    let preview: Vec<MatchRow> = rows.into_iter().take(PREVIEW_ROW_CAP).collect();

    let data = MatchRunData {
        policy_version: MATCH_POLICY_VERSION.to_string(),
        dry_run: options.dry_run,
        output_path,
        brand_strategy: output.strategy.as_str().to_string(),
        summary: MatchRunSummary {
            names_read: names.read,
            names_dropped: names.dropped,
            catalog_read: catalog.read,
            catalog_dropped: catalog.dropped,
            matched,
            unmatched: names.read - names.dropped - matched,
        },
        preview,
        preview_truncated,
    };

    SuccessEnvelope::for_command("match", data)
}

fn to_match_row(outcome: &MatchOutcome) -> MatchRow {
    let name = &outcome.name.name;
    MatchRow {
        product_id: name.product_id,
        product_name: name.product_name.clone(),
        matched_sku: outcome
            .refined
            .as_ref()
            .map(|winner| winner.product_sku.clone()),
        matched_sku_id: outcome.refined.as_ref().map(|winner| winner.sku_id),
        coarse_sku: outcome
            .coarse
            .as_ref()
            .map(|winner| winner.product_sku.clone()),
        coarse_sku_id: outcome.coarse.as_ref().map(|winner| winner.sku_id),
        possible_brand: outcome.name.possible_brand.clone(),
        clean_name: name.clean_name.clone(),
        clean_name_alphanum: name.clean_name_alphanum.clone(),
        clean_name_non_formula: name.clean_name_non_formula.clone(),
        clean_name_formula: name.clean_name_formula.clone(),
        is_only_alphanumeric: name.is_only_alphanumeric,
        is_alphabetic_only: name.is_alphabetic_only,
        fuzzy_ratio: outcome.refined.as_ref().map(|winner| winner.fuzzy_ratio),
        coarse_edit_distance: outcome.coarse.as_ref().map(|winner| winner.edit_distance),
        coarse_edit_distance_without_formula: outcome
            .coarse
            .as_ref()
            .map(|winner| winner.edit_distance_without_formula),
        matched_edit_distance: outcome.refined.as_ref().map(|winner| winner.edit_distance),
        coarse_common_tokens: outcome.coarse.as_ref().map(|winner| winner.common_tokens),
        matched_common_tokens: outcome.refined.as_ref().map(|winner| winner.common_tokens),
        matched_token_present: outcome.refined.as_ref().map(|winner| winner.token_present),
        brand_match: outcome.refined.as_ref().map(|winner| winner.brand_match),
    }
}
