use crate::ingest::parse::{ParsedCatalogRow, ParsedNameRow};
use crate::matching::types::{RawCatalogEntry, RawName};

#[derive(Debug, Clone)]
pub(crate) struct ValidatedNames {
    pub(crate) rows: Vec<RawName>,
    pub(crate) read: i64,
    pub(crate) dropped: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct ValidatedCatalog {
    pub(crate) rows: Vec<RawCatalogEntry>,
    pub(crate) read: i64,
    pub(crate) dropped: i64,
}

/// Drop-and-count validation: rows missing an integer id or a
/// non-empty name never reach the matcher, and the run summary
/// reports how many were discarded.
pub(crate) fn validate_names(parsed_rows: Vec<ParsedNameRow>) -> ValidatedNames {
    let read = parsed_rows.len() as i64;
    let mut rows = Vec::new();

    for raw in parsed_rows {
        let Some(product_id) = parse_id(raw.product_id.as_deref()) else {
            continue;
        };
        let Some(product_name) = non_empty(raw.product_name) else {
            continue;
        };
        rows.push(RawName {
            product_id,
            product_name,
        });
    }

    let dropped = read - rows.len() as i64;
    ValidatedNames {
        rows,
        read,
        dropped,
    }
}

/// Catalog rows need an integer id, a SKU string and a brand. Type
/// and formula may be empty; they only weaken the refined score.
pub(crate) fn validate_catalog(parsed_rows: Vec<ParsedCatalogRow>) -> ValidatedCatalog {
    let read = parsed_rows.len() as i64;
    let mut rows = Vec::new();

    for raw in parsed_rows {
        let Some(sku_id) = parse_id(raw.sku_id.as_deref()) else {
            continue;
        };
        let Some(product_sku) = non_empty(raw.product_sku) else {
            continue;
        };
        let Some(brand) = non_empty(raw.brand) else {
            continue;
        };
        rows.push(RawCatalogEntry {
            sku_id,
            product_sku,
            brand,
            product_type: raw.product_type.unwrap_or_default().trim().to_string(),
            formula: raw.formula.unwrap_or_default().trim().to_string(),
        });
    }

    let dropped = read - rows.len() as i64;
    ValidatedCatalog {
        rows,
        read,
        dropped,
    }
}

fn parse_id(value: Option<&str>) -> Option<i64> {
    value?.trim().parse::<i64>().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}
