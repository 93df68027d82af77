#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use skumatch_core::commands::match_run::{self, MatchRunOptions};
use skumatch_core::{PipelineResult, SuccessEnvelope};
use tempfile::TempDir;

pub fn write_file(path: &Path, body: &str) {
    let result = fs::write(path, body);
    assert!(result.is_ok());
}

pub fn temp_workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    let dir = dir.unwrap();
    let root = dir.path().to_path_buf();
    (dir, root)
}

pub fn names_fixture(root: &Path, body: &str) -> PathBuf {
    let path = root.join("names.tsv");
    write_file(&path, body);
    path
}

pub fn catalog_fixture(root: &Path, body: &str) -> PathBuf {
    let path = root.join("catalog.tsv");
    write_file(&path, body);
    path
}

pub fn run_match(
    names_path: &Path,
    catalog_path: &Path,
    out_path: Option<&Path>,
    brand_patterns_path: Option<&Path>,
    dry_run: bool,
) -> PipelineResult<SuccessEnvelope> {
    match_run::run_with_options(MatchRunOptions {
        names_path: names_path.display().to_string(),
        catalog_path: catalog_path.display().to_string(),
        out_path: out_path.map(|value| value.display().to_string()),
        brand_patterns_path: brand_patterns_path.map(|value| value.display().to_string()),
        dry_run,
        stdin_override: None,
    })
}
