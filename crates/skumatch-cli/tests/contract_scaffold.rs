use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::Value;

const EXPECTED_ROOT_HELP: &str = "skumatch - product name to SKU catalog matcher

Usage:
  skumatch <command>

Start here:
  skumatch match --help
  skumatch brands --catalog <path>
  skumatch normalize <text>
";

const CATALOG: &str = "sku_id\tproduct_sku\tbrand\ttype\tformula\n\
    1\tBRANDX-VITC-100ML\tBrandX\tVitamin\t\n\
    2\tGREENGRO-NPK-15-15-20\tGreenGro\tFertilizer\t15x15x20\n";

const NAMES: &str = "product_id\tproduct_name\n10\tBrand X Vitamin C 100ml\n";

fn run_cli_in(dir: &Path, args: &[&str]) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_skumatch"));
    for arg in args {
        command.arg(arg);
    }
    command.current_dir(dir);
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output();
    assert!(output.is_ok());
    if let Ok(result) = output {
        let stdout = String::from_utf8(result.stdout);
        assert!(stdout.is_ok());
        if let Ok(stdout_text) = stdout {
            return (result.status.success(), stdout_text);
        }
    }

    (false, String::new())
}

fn run_cli(args: &[&str]) -> (bool, String) {
    let dir = std::env::temp_dir();
    run_cli_in(&dir, args)
}

fn fixture_dir() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    let dir = dir.unwrap();
    let names = dir.path().join("names.tsv");
    let catalog = dir.path().join("catalog.tsv");
    assert!(fs::write(&names, NAMES).is_ok());
    assert!(fs::write(&catalog, CATALOG).is_ok());
    (dir, names, catalog)
}

#[test]
fn bare_invocation_prints_root_help() {
    let (ok, body) = run_cli(&[]);
    assert!(ok);
    assert_eq!(body, EXPECTED_ROOT_HELP);
}

#[test]
fn top_level_help_flag_prints_the_guide() {
    let (ok, body) = run_cli(&["--help"]);
    assert!(ok);
    assert!(body.contains("skumatch — product name to SKU catalog matcher"));
    assert!(body.contains("skumatch match --dry-run"));
    assert!(body.contains("skumatch normalize <text>"));
}

#[test]
fn match_end_to_end_writes_the_output_file() {
    let (dir, names, catalog) = fixture_dir();
    let out = dir.path().join("matches.tsv");

    let (ok, body) = run_cli_in(
        dir.path(),
        &[
            "match",
            "--names",
            &names.display().to_string(),
            "--catalog",
            &catalog.display().to_string(),
            "--out",
            &out.display().to_string(),
        ],
    );
    assert!(ok, "match failed: {body}");
    assert!(body.contains("Matching completed successfully."));
    assert!(body.contains("Matched:"));

    let written = fs::read_to_string(&out);
    assert!(written.is_ok());
    if let Ok(content) = written {
        assert!(content.contains("BRANDX-VITC-100ML"));
    }
}

#[test]
fn match_json_mode_emits_the_success_envelope() {
    let (dir, names, catalog) = fixture_dir();
    let out = dir.path().join("matches.tsv");

    let (ok, body) = run_cli_in(
        dir.path(),
        &[
            "match",
            "--names",
            &names.display().to_string(),
            "--catalog",
            &catalog.display().to_string(),
            "--out",
            &out.display().to_string(),
            "--json",
        ],
    );
    assert!(ok);

    let parsed: Result<Value, _> = serde_json::from_str(&body);
    assert!(parsed.is_ok());
    if let Ok(value) = parsed {
        assert_eq!(value["ok"], Value::Bool(true));
        assert_eq!(value["command"], Value::String("match".to_string()));
        assert_eq!(value["data"]["summary"]["matched"], Value::from(1));
        assert_eq!(
            value["data"]["preview"][0]["matched_sku"],
            Value::String("BRANDX-VITC-100ML".to_string())
        );
    }
}

#[test]
fn dry_run_does_not_write_output() {
    let (dir, names, catalog) = fixture_dir();
    let out = dir.path().join("matches.tsv");

    let (ok, body) = run_cli_in(
        dir.path(),
        &[
            "match",
            "--dry-run",
            "--names",
            &names.display().to_string(),
            "--catalog",
            &catalog.display().to_string(),
            "--out",
            &out.display().to_string(),
        ],
    );
    assert!(ok);
    assert!(body.contains("Dry-run validation completed successfully."));
    assert!(!out.exists());
}

#[test]
fn missing_input_file_fails_with_text_guidance() {
    let (dir, _names, catalog) = fixture_dir();

    let (ok, body) = run_cli_in(
        dir.path(),
        &[
            "match",
            "--names",
            "absent.tsv",
            "--catalog",
            &catalog.display().to_string(),
        ],
    );
    assert!(!ok);
    assert!(body.contains("The command could not complete."));
    assert!(body.contains("input_unreadable"));
    assert!(body.contains("What to do next:"));
}

#[test]
fn parse_errors_render_through_the_error_contract_in_json_mode() {
    let (ok, body) = run_cli(&["match", "--names", "names.tsv", "--json"]);
    assert!(!ok);

    let parsed: Result<Value, _> = serde_json::from_str(&body);
    assert!(parsed.is_ok());
    if let Ok(value) = parsed {
        assert_eq!(
            value["error"]["code"],
            Value::String("invalid_argument".to_string())
        );
        assert!(value["error"]["recovery_steps"].is_array());
    }
}

#[test]
fn unknown_subcommand_is_a_user_error() {
    let (ok, body) = run_cli(&["rank", "everything"]);
    assert!(!ok);
    assert!(body.contains("invalid_argument"));
}

#[test]
fn brands_command_lists_the_vocabulary() {
    let (dir, _names, catalog) = fixture_dir();

    let (ok, body) = run_cli_in(
        dir.path(),
        &["brands", "--catalog", &catalog.display().to_string()],
    );
    assert!(ok);
    assert!(body.contains("2 brands found."));
    assert!(body.contains("brandx"));
    assert!(body.contains("greengro"));
}

#[test]
fn normalize_command_shows_derived_fields() {
    let (ok, body) = run_cli(&["normalize", "Brand-X 4.5-3.6-2.1"]);
    assert!(ok);
    assert!(body.contains("Clean:"));
    assert!(body.contains("brand - x 4.5x3.6x2.1"));
    assert!(body.contains("4.5x3.6x2.1"));
}

#[test]
fn normalize_json_mode_round_trips_the_fields() {
    let (ok, body) = run_cli(&["normalize", "100ml", "--json"]);
    assert!(ok);

    let parsed: Result<Value, _> = serde_json::from_str(&body);
    assert!(parsed.is_ok());
    if let Ok(value) = parsed {
        assert_eq!(value["command"], Value::String("normalize".to_string()));
        assert_eq!(
            value["data"]["clean_name"],
            Value::String("100 ml".to_string())
        );
    }
}
