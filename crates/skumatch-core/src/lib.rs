pub mod commands;
pub mod contracts;
pub mod error;
mod export;
mod ingest;
pub mod matching;

pub use contracts::envelope::SuccessEnvelope;
pub use error::{PipelineError, PipelineResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
