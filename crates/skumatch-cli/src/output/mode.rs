use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Match { json, .. }
        | Commands::Brands { json, .. }
        | Commands::Normalize { json, .. } => *json,
    };
    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_selects_json_mode_for_every_command() {
        let cases: [Vec<&str>; 3] = [
            vec![
                "skumatch",
                "match",
                "--names",
                "n.tsv",
                "--catalog",
                "c.tsv",
                "--json",
            ],
            vec!["skumatch", "brands", "--catalog", "c.tsv", "--json"],
            vec!["skumatch", "normalize", "100ml", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn commands_default_to_text_mode() {
        let parsed = parse_from(["skumatch", "normalize", "100ml"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
