pub mod brands;
pub mod match_run;
pub mod normalize;

use std::collections::BTreeMap;
use std::fs;

use crate::error::{PipelineError, PipelineResult};

/// Loads and parses a `{brand: pattern}` JSON object file.
pub(crate) fn load_brand_patterns(path: &str) -> PipelineResult<BTreeMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|error| {
        PipelineError::input_unreadable("brand patterns", path, &error.to_string())
    })?;

    serde_json::from_str::<BTreeMap<String, String>>(&content).map_err(|error| {
        PipelineError::invalid_argument_with_recovery(
            &format!("Brand pattern file `{path}` is not a JSON object of strings: {error}"),
            vec![
                "Provide a JSON object mapping each brand to a regex pattern.".to_string(),
                "Or omit --brand-patterns to derive brand tokens from the catalog.".to_string(),
            ],
        )
    })
}
