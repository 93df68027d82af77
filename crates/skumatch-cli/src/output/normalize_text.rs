use std::io;

use serde_json::Value;

use super::format;

pub fn render_normalize(data: &Value) -> io::Result<String> {
    let raw = data
        .get("raw")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("normalize output requires raw"))?;

    let entries = vec![
        ("Raw:", raw.to_string()),
        ("Clean:", text_field(data, "clean_name")),
        ("Alphanumeric:", text_field(data, "clean_name_alphanum")),
        (
            "Non-formula prefix:",
            optional_field(data, "clean_name_non_formula"),
        ),
        ("Formula:", optional_field(data, "clean_name_formula")),
        (
            "Only alphanumeric:",
            bool_field(data, "is_only_alphanumeric"),
        ),
        ("Alphabetic only:", bool_field(data, "is_alphabetic_only")),
    ];

    Ok(format::key_value_rows(&entries, 2).join("\n"))
}

fn text_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn optional_field(data: &Value, key: &str) -> String {
    match data.get(key).and_then(Value::as_str) {
        Some(value) => value.to_string(),
        None => "(none)".to_string(),
    }
}

fn bool_field(data: &Value, key: &str) -> String {
    match data.get(key).and_then(Value::as_bool) {
        Some(true) => "yes".to_string(),
        _ => "no".to_string(),
    }
}
