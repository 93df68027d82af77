pub(crate) mod input;
pub(crate) mod parse;
pub(crate) mod validate;

use crate::error::{PipelineError, PipelineResult};
use crate::matching::types::{RawCatalogEntry, RawName};

#[derive(Debug, Clone)]
pub(crate) struct LoadedNames {
    pub(crate) rows: Vec<RawName>,
    pub(crate) read: i64,
    pub(crate) dropped: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedCatalog {
    pub(crate) rows: Vec<RawCatalogEntry>,
    pub(crate) read: i64,
    pub(crate) dropped: i64,
}

pub(crate) fn load_names(path: &str, stdin_override: Option<String>) -> PipelineResult<LoadedNames> {
    let content = input::resolve_source(path, "names", stdin_override)?;
    let parsed = parse::parse_names(&content)?;
    let validated = validate::validate_names(parsed);
    Ok(LoadedNames {
        rows: validated.rows,
        read: validated.read,
        dropped: validated.dropped,
    })
}

pub(crate) fn load_catalog(
    path: &str,
    stdin_override: Option<String>,
) -> PipelineResult<LoadedCatalog> {
    let content = input::resolve_source(path, "catalog", stdin_override)?;
    let parsed = parse::parse_catalog(&content)?;
    let validated = validate::validate_catalog(parsed);
    Ok(LoadedCatalog {
        rows: validated.rows,
        read: validated.read,
        dropped: validated.dropped,
    })
}

/// At most one of the two inputs may come from stdin.
pub(crate) fn reject_double_stdin(names_path: &str, catalog_path: &str) -> PipelineResult<()> {
    if names_path == "-" && catalog_path == "-" {
        return Err(PipelineError::invalid_argument_with_recovery(
            "Both --names and --catalog point at stdin; only one input may be piped.",
            vec!["Pass a file path for at least one of the two inputs.".to_string()],
        ));
    }
    Ok(())
}
