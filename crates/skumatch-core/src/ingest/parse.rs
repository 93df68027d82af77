use std::collections::HashMap;

use crate::error::{PipelineError, PipelineResult};

pub(crate) const NAME_HEADERS: [&str; 2] = ["product_id", "product_name"];
pub(crate) const CATALOG_HEADERS: [&str; 5] = ["sku_id", "product_sku", "brand", "type", "formula"];

#[derive(Debug, Clone)]
pub(crate) struct ParsedNameRow {
    pub(crate) product_id: Option<String>,
    pub(crate) product_name: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct ParsedCatalogRow {
    pub(crate) sku_id: Option<String>,
    pub(crate) product_sku: Option<String>,
    pub(crate) brand: Option<String>,
    pub(crate) product_type: Option<String>,
    pub(crate) formula: Option<String>,
}

pub(crate) fn parse_names(content: &str) -> PipelineResult<Vec<ParsedNameRow>> {
    let (headers, mut reader) = open_table(content, "names")?;
    require_headers("names", &headers, &NAME_HEADERS)?;
    let index_by_name = header_index(&headers);

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|error| malformed_rows("names", &error))?;
        rows.push(ParsedNameRow {
            product_id: value_for(&record, &index_by_name, "product_id"),
            product_name: value_for(&record, &index_by_name, "product_name"),
        });
    }
    Ok(rows)
}

pub(crate) fn parse_catalog(content: &str) -> PipelineResult<Vec<ParsedCatalogRow>> {
    let (headers, mut reader) = open_table(content, "catalog")?;
    require_headers("catalog", &headers, &CATALOG_HEADERS)?;
    let index_by_name = header_index(&headers);

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|error| malformed_rows("catalog", &error))?;
        rows.push(ParsedCatalogRow {
            sku_id: value_for(&record, &index_by_name, "sku_id"),
            product_sku: value_for(&record, &index_by_name, "product_sku"),
            brand: value_for(&record, &index_by_name, "brand"),
            product_type: value_for(&record, &index_by_name, "type"),
            formula: value_for(&record, &index_by_name, "formula"),
        });
    }
    Ok(rows)
}

type Table<'content> = (Vec<String>, csv::Reader<&'content [u8]>);

/// Sniffs the delimiter from the header line (a tab anywhere makes it
/// TSV, otherwise CSV) and reads the header row.
fn open_table<'content>(content: &'content str, label: &str) -> PipelineResult<Table<'content>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::invalid_argument_with_recovery(
            &format!("The {label} input is empty."),
            vec!["Provide a TSV or CSV file with a header row.".to_string()],
        ));
    }

    let delimiter = match trimmed.lines().next() {
        Some(first_line) if first_line.contains('\t') => b'\t',
        _ => b',',
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.trim_start().as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| malformed_rows(label, &error))?
        .iter()
        .map(|value| value.trim().to_lowercase())
        .collect::<Vec<String>>();

    Ok((headers, reader))
}

fn require_headers(
    label: &str,
    actual_headers: &[String],
    required_headers: &[&str],
) -> PipelineResult<()> {
    let all_required_present = required_headers
        .iter()
        .all(|required| actual_headers.iter().any(|value| value == required));
    let no_unknown = actual_headers
        .iter()
        .all(|header| required_headers.contains(&header.as_str()));

    if all_required_present && no_unknown {
        return Ok(());
    }

    Err(PipelineError::input_schema_mismatch(
        label,
        required_headers
            .iter()
            .map(|value| value.to_string())
            .collect(),
        actual_headers.to_vec(),
    ))
}

fn header_index(headers: &[String]) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), index))
        .collect()
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn malformed_rows(label: &str, error: &csv::Error) -> PipelineError {
    PipelineError::invalid_argument_with_recovery(
        &format!("The {label} rows are malformed or not UTF-8: {error}"),
        vec!["Fix the offending row and rerun.".to_string()],
    )
}
