use std::fs;
use std::io::{IsTerminal, Read};

use crate::error::{PipelineError, PipelineResult};

/// Resolves one input path to its content. `-` means stdin; anything
/// else is read as a file. The caller guards against two stdin
/// sources in one run.
pub(crate) fn resolve_source(
    path: &str,
    label: &str,
    stdin_override: Option<String>,
) -> PipelineResult<String> {
    if path == "-" {
        let stdin_body = read_stdin(label, stdin_override)?;
        let Some(content) = stdin_body else {
            return Err(PipelineError::invalid_argument_with_recovery(
                &format!("Path `-` means stdin input for the {label} file, but stdin was empty."),
                vec![
                    "Pipe TSV/CSV content into the command.".to_string(),
                    "Or pass a file path instead of `-`.".to_string(),
                ],
            ));
        };
        return Ok(content);
    }

    fs::read_to_string(path)
        .map_err(|error| PipelineError::input_unreadable(label, path, &error.to_string()))
}

fn read_stdin(label: &str, stdin_override: Option<String>) -> PipelineResult<Option<String>> {
    if let Some(value) = stdin_override {
        if value.trim().is_empty() {
            return Ok(None);
        }
        return Ok(Some(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| PipelineError::input_unreadable(label, "-", &error.to_string()))?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}
