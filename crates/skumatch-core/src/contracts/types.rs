use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MatchRunSummary {
    pub names_read: i64,
    pub names_dropped: i64,
    pub catalog_read: i64,
    pub catalog_dropped: i64,
    pub matched: i64,
    pub unmatched: i64,
}

/// One output row of the pipeline, as rendered to the result TSV and
/// to machine consumers. Nullable fields stay empty in the TSV.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub product_id: i64,
    pub product_name: String,
    pub matched_sku: Option<String>,
    pub matched_sku_id: Option<i64>,
    pub coarse_sku: Option<String>,
    pub coarse_sku_id: Option<i64>,
    pub possible_brand: Option<String>,
    pub clean_name: String,
    pub clean_name_alphanum: String,
    pub clean_name_non_formula: Option<String>,
    pub clean_name_formula: Option<String>,
    pub is_only_alphanumeric: bool,
    pub is_alphabetic_only: bool,
    pub fuzzy_ratio: Option<i64>,
    pub coarse_edit_distance: Option<i64>,
    pub coarse_edit_distance_without_formula: Option<i64>,
    pub matched_edit_distance: Option<i64>,
    pub coarse_common_tokens: Option<i64>,
    pub matched_common_tokens: Option<i64>,
    pub matched_token_present: Option<bool>,
    pub brand_match: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRunData {
    pub policy_version: String,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    pub brand_strategy: String,
    pub summary: MatchRunSummary,
    pub preview: Vec<MatchRow>,
    pub preview_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandVocabularyEntry {
    pub brand: String,
    pub tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandVocabularyData {
    pub strategy: String,
    pub catalog_read: i64,
    pub catalog_dropped: i64,
    pub brands: Vec<BrandVocabularyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeData {
    pub raw: String,
    pub clean_name: String,
    pub clean_name_alphanum: String,
    pub clean_name_non_formula: Option<String>,
    pub clean_name_formula: Option<String>,
    pub is_only_alphanumeric: bool,
    pub is_alphabetic_only: bool,
}
