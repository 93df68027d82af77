use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{PipelineError, PipelineResult};

/// The payload every command returns on success. `data` carries the
/// command-specific contract already serialized to JSON; failures
/// travel as [`PipelineError`] and are rendered by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

impl SuccessEnvelope {
    pub fn for_command<T>(command: &str, data: T) -> PipelineResult<Self>
    where
        T: Serialize,
    {
        let data = serde_json::to_value(data)
            .map_err(|err| PipelineError::internal_serialization(&err.to_string()))?;
        Ok(Self {
            ok: true,
            command: command.to_string(),
            version: API_VERSION.to_string(),
            data,
        })
    }
}
