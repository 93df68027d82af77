use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_match_run(data: &Value) -> io::Result<String> {
    let dry_run = data
        .get("dry_run")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let summary = data
        .get("summary")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("match output requires summary"))?;

    let mut lines = Vec::new();
    if dry_run {
        lines.push("Dry-run validation completed successfully.".to_string());
    } else {
        lines.push("Matching completed successfully.".to_string());
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());

    let mut entries = vec![
        ("Names read:", get_i64(summary, "names_read").to_string()),
        (
            "Names dropped:",
            get_i64(summary, "names_dropped").to_string(),
        ),
        ("Catalog read:", get_i64(summary, "catalog_read").to_string()),
        (
            "Catalog dropped:",
            get_i64(summary, "catalog_dropped").to_string(),
        ),
        ("Matched:", get_i64(summary, "matched").to_string()),
        ("Unmatched:", get_i64(summary, "unmatched").to_string()),
    ];
    entries.push((
        "Brand strategy:",
        data.get("brand_strategy")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
    ));
    if let Some(path) = data.get("output_path").and_then(Value::as_str) {
        entries.push(("Output:", path.to_string()));
    }
    lines.extend(format::key_value_rows(&entries, 2));

    lines.push(String::new());
    lines.extend(render_preview(data));

    if dry_run {
        lines.push(String::new());
        lines.push("No output was written because this was a dry run.".to_string());
    }

    Ok(lines.join("\n"))
}

fn render_preview(data: &Value) -> Vec<String> {
    let preview = data
        .get("preview")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if preview.is_empty() {
        return vec!["No names to preview.".to_string()];
    }

    let truncated = data
        .get("preview_truncated")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut lines = Vec::new();
    if truncated {
        lines.push(format!("Preview (first {} rows):", preview.len()));
    } else {
        lines.push("Preview:".to_string());
    }

    let columns = [
        Column {
            name: "ID",
            align: Align::Right,
        },
        Column {
            name: "Product name",
            align: Align::Left,
        },
        Column {
            name: "Matched SKU",
            align: Align::Left,
        },
        Column {
            name: "Brand",
            align: Align::Left,
        },
        Column {
            name: "Fuzzy",
            align: Align::Right,
        },
    ];

    let rows = preview
        .iter()
        .map(|row| {
            vec![
                row.get("product_id")
                    .and_then(Value::as_i64)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
                text_cell(row, "product_name"),
                match row.get("matched_sku").and_then(Value::as_str) {
                    Some(sku) => sku.to_string(),
                    None => "(no match)".to_string(),
                },
                text_cell(row, "possible_brand"),
                row.get("fuzzy_ratio")
                    .and_then(Value::as_i64)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Match",
    ));
    lines
}

fn text_cell(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn get_i64(summary: &serde_json::Map<String, Value>, key: &str) -> i64 {
    summary.get(key).and_then(Value::as_i64).unwrap_or(0)
}
