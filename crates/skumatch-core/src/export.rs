use crate::contracts::types::MatchRow;
use crate::error::{PipelineError, PipelineResult};

/// Writes the result table as TSV, one row per input name, headers
/// from the row struct. Nullable diagnostics render as empty cells.
pub(crate) fn write_match_rows(path: &str, rows: &[MatchRow]) -> PipelineResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|error| PipelineError::output_write_failed(path, &error.to_string()))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|error| PipelineError::output_write_failed(path, &error.to_string()))?;
    }

    writer
        .flush()
        .map_err(|error| PipelineError::output_write_failed(path, &error.to_string()))
}
