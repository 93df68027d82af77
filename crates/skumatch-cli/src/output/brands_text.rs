use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_brand_vocabulary(data: &Value) -> io::Result<String> {
    let brands = data
        .get("brands")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("brands output requires brands"))?;

    let strategy = data
        .get("strategy")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    if brands.is_empty() {
        return Ok([
            "No brands found in the catalog.",
            "",
            "Check the catalog file:",
            "  1. skumatch match --help",
            "  2. skumatch brands --catalog <path>",
        ]
        .join("\n"));
    }

    let count_label = if brands.len() == 1 {
        "1 brand found.".to_string()
    } else {
        format!("{} brands found.", brands.len())
    };

    let mut lines = vec![count_label, String::new()];
    lines.extend(format::key_value_rows(
        &[("Strategy:", strategy.to_string())],
        2,
    ));
    lines.push(String::new());

    let columns = [
        Column {
            name: "Brand",
            align: Align::Left,
        },
        Column {
            name: "Matches on",
            align: Align::Left,
        },
    ];

    let rows = brands
        .iter()
        .map(|brand| {
            let name = brand
                .get("brand")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            let matches_on = match brand.get("pattern").and_then(Value::as_str) {
                Some(pattern) => format!("/{pattern}/"),
                None => brand
                    .get("tokens")
                    .and_then(Value::as_array)
                    .map(|tokens| {
                        tokens
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<&str>>()
                            .join(", ")
                    })
                    .unwrap_or_default(),
            };
            vec![name, matches_on]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Brand",
    ));

    Ok(lines.join("\n"))
}
