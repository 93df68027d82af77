use skumatch_core::commands;
use skumatch_core::{PipelineResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> PipelineResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Match {
            names,
            catalog,
            out,
            brand_patterns,
            dry_run,
            json: _,
        } => commands::match_run::run(
            names.clone(),
            catalog.clone(),
            out.clone(),
            brand_patterns.clone(),
            *dry_run,
        ),
        Commands::Brands {
            catalog,
            brand_patterns,
            json: _,
        } => commands::brands::run(catalog.clone(), brand_patterns.clone()),
        Commands::Normalize { text, json: _ } => commands::normalize::run(text.clone()),
    }
}
