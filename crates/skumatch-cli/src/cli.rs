use clap::{Parser, Subcommand};

/// Extended help shown after `skumatch match --help`.
/// Contains input schemas and workflow guidance.
pub const MATCH_AFTER_HELP: &str = "\
How matching works:
  skumatch reads two delimited files (tab- or comma-separated,
  sniffed from the header line) and writes one TSV row per product
  name with the best catalog match and the scoring diagnostics.

  Names file headers:   product_id, product_name
  Catalog file headers: sku_id, product_sku, brand, type, formula

  Use `-` as one of the two paths to read that input from stdin.
  Example: cat names.tsv | skumatch match --names - --catalog catalog.tsv

What to do next:
  1. Run `skumatch match --dry-run --names <path> --catalog <path>`
     and check the reported dropped-row counts.
  2. Run the same command without --dry-run to write the result table.
  3. Inspect brand inference with `skumatch brands --catalog <path>`.

Brand patterns (optional):
  By default brand vocabularies are derived from the catalog itself.
  Pass --brand-patterns <path> with a JSON object mapping each brand
  to a regex to override the derivation. Every catalog brand must
  have a pattern; a gap fails the run before any scoring.
";

#[derive(Debug, Parser)]
#[command(
    name = "skumatch",
    version,
    about = "product name to SKU catalog matcher",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match free-text product names against a SKU catalog
    #[command(after_long_help = MATCH_AFTER_HELP)]
    Match {
        /// Path to the names file (use `-` for stdin)
        #[arg(long)]
        names: String,
        /// Path to the catalog file (use `-` for stdin)
        #[arg(long)]
        catalog: String,
        /// Output path for the result TSV (default: matches.tsv)
        #[arg(long)]
        out: Option<String>,
        /// Path to a JSON object of brand regex patterns
        #[arg(long)]
        brand_patterns: Option<String>,
        /// Validate inputs and report counts without writing output
        #[arg(long)]
        dry_run: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the brand vocabulary the tagger would use for a catalog
    Brands {
        /// Path to the catalog file (use `-` for stdin)
        #[arg(long)]
        catalog: String,
        /// Path to a JSON object of brand regex patterns
        #[arg(long)]
        brand_patterns: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show every derived normalization field for one string
    Normalize {
        /// The raw product name text to normalize
        text: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 11] = [
            vec![
                "skumatch",
                "match",
                "--names",
                "names.tsv",
                "--catalog",
                "catalog.tsv",
            ],
            vec![
                "skumatch",
                "match",
                "--names",
                "names.tsv",
                "--catalog",
                "catalog.tsv",
                "--out",
                "result.tsv",
            ],
            vec![
                "skumatch",
                "match",
                "--names",
                "-",
                "--catalog",
                "catalog.tsv",
                "--dry-run",
            ],
            vec![
                "skumatch",
                "match",
                "--names",
                "names.csv",
                "--catalog",
                "catalog.csv",
                "--brand-patterns",
                "patterns.json",
                "--json",
            ],
            vec!["skumatch", "brands", "--catalog", "catalog.tsv"],
            vec!["skumatch", "brands", "--catalog", "-", "--json"],
            vec![
                "skumatch",
                "brands",
                "--catalog",
                "catalog.tsv",
                "--brand-patterns",
                "patterns.json",
            ],
            vec!["skumatch", "normalize", "Brand-X 4.5-3.6-2.1"],
            vec!["skumatch", "normalize", "100ml", "--json"],
            vec![
                "skumatch",
                "match",
                "--catalog",
                "catalog.tsv",
                "--names",
                "names.tsv",
                "--json",
            ],
            vec!["skumatch", "normalize", "--", "-weird leading dash"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn match_requires_both_input_paths() {
        let missing_catalog = parse_from(["skumatch", "match", "--names", "names.tsv"]);
        assert!(missing_catalog.is_err());
        if let Err(error) = missing_catalog {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        }

        let missing_names = parse_from(["skumatch", "match", "--catalog", "catalog.tsv"]);
        assert!(missing_names.is_err());
    }

    #[test]
    fn normalize_requires_the_text_argument() {
        let parsed = parse_from(["skumatch", "normalize"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_subcommands_are_rejected() {
        let parsed = parse_from(["skumatch", "rank"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn match_flags_land_in_the_expected_fields() {
        let parsed = parse_from([
            "skumatch",
            "match",
            "--names",
            "n.tsv",
            "--catalog",
            "c.tsv",
            "--dry-run",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Match {
                    dry_run: true,
                    json: false,
                    ..
                }
            ));
        }
    }
}
