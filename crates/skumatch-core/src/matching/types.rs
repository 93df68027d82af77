/// A product name surviving ingest validation.
#[derive(Debug, Clone)]
pub struct RawName {
    pub product_id: i64,
    pub product_name: String,
}

/// A catalog entry surviving ingest validation.
#[derive(Debug, Clone)]
pub struct RawCatalogEntry {
    pub sku_id: i64,
    pub product_sku: String,
    pub brand: String,
    pub product_type: String,
    pub formula: String,
}

/// A product name with every derived normalization view attached.
#[derive(Debug, Clone)]
pub struct NormalizedName {
    pub product_id: i64,
    pub product_name: String,
    pub clean_name: String,
    pub clean_name_alphanum: String,
    pub clean_name_non_formula: Option<String>,
    pub clean_name_formula: Option<String>,
    pub is_only_alphanumeric: bool,
    pub is_alphabetic_only: bool,
}

/// A catalog entry with its normalized views. `brand` is lowercased
/// with spaces removed so it doubles as a matchable token.
#[derive(Debug, Clone)]
pub struct NormalizedCatalogEntry {
    pub sku_id: i64,
    pub product_sku: String,
    pub brand: String,
    pub product_type: String,
    pub formula: String,
    pub clean_sku: String,
    pub clean_sku_alphanum: String,
}

#[derive(Debug, Clone)]
pub struct BrandTaggedName {
    pub name: NormalizedName,
    pub possible_brand: Option<String>,
}

/// The stage-1 survivor for one product name: the catalog entry at
/// minimum edit distance, with its coarse diagnostics.
#[derive(Debug, Clone)]
pub struct CoarseMatch {
    pub sku_id: i64,
    pub product_sku: String,
    pub clean_sku: String,
    pub edit_distance: i64,
    pub edit_distance_without_formula: i64,
    pub common_tokens: i64,
}

/// One refined name-entry score. Ephemeral: candidates exist only to
/// be reduced to a single winner per product name. `brand_present`
/// says whether the name carries an inferred brand at all, so it is
/// constant across one name's candidates.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub sku_id: i64,
    pub product_sku: String,
    pub clean_sku: String,
    pub brand_match: bool,
    pub brand_present: bool,
    pub token_present: bool,
    pub fuzzy_ratio: i64,
    pub edit_distance: i64,
    pub edit_distance_without_formula: i64,
    pub common_tokens: i64,
}

/// The final per-name outcome. Both passes are optional: the coarse
/// pass is absent only for an empty catalog, the refined pass also
/// when no entry survives the brand-consistency filter.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub name: BrandTaggedName,
    pub coarse: Option<CoarseMatch>,
    pub refined: Option<MatchCandidate>,
}
