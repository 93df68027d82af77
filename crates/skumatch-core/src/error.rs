use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PipelineError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl PipelineError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `skumatch {cmd} --help` for usage."),
            None => "Run `skumatch --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn input_unreadable(label: &str, path: &str, detail: &str) -> Self {
        Self::new(
            "input_unreadable",
            &format!("Could not read {label} file `{path}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Rerun `skumatch match --names <path> --catalog <path>`.".to_string(),
            ],
        )
        .with_data(json!({
            "input": label,
            "path": path,
        }))
    }

    pub fn input_schema_mismatch(
        label: &str,
        required_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "input_schema_mismatch",
            &format!("The {label} header row does not satisfy the expected schema."),
            vec![
                "Include every required header exactly once; do not include unknown headers."
                    .to_string(),
                "Run `skumatch match --help` to review the input schemas.".to_string(),
                "Rerun `skumatch match --dry-run ...` after fixing the header row.".to_string(),
            ],
        )
        .with_data(json!({
            "input": label,
            "required_headers": required_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn brand_pattern_missing(missing_brands: Vec<String>) -> Self {
        let count = missing_brands.len();
        Self::new(
            "brand_pattern_missing",
            &format!(
                "The brand pattern file has no entry for {count} catalog brand(s). \
                 Every catalog brand needs a pattern before matching can start."
            ),
            vec![
                "Add a pattern for each listed brand to the pattern file.".to_string(),
                "Or omit --brand-patterns to derive brand tokens from the catalog.".to_string(),
            ],
        )
        .with_data(json!({
            "missing_brands": missing_brands,
        }))
    }

    pub fn brand_pattern_invalid(brand: &str, pattern: &str, detail: &str) -> Self {
        Self::new(
            "brand_pattern_invalid",
            &format!("Brand pattern for `{brand}` does not compile: {detail}"),
            vec![
                "Fix the pattern so it is a valid regular expression.".to_string(),
                "Patterns are matched against the lowercased, space-stripped clean name."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "brand": brand,
            "pattern": pattern,
        }))
    }

    pub fn output_write_failed(path: &str, detail: &str) -> Self {
        Self::new(
            "output_write_failed",
            &format!("Could not write match output to `{path}`: {detail}"),
            vec![
                "Verify the output directory exists and is writable.".to_string(),
                "Or pass a different location with --out <path>.".to_string(),
            ],
        )
        .with_data(json!({
            "path": path,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
