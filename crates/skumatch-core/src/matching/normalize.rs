use regex::Regex;

use crate::error::{PipelineError, PipelineResult};

/// Compiled rewrite rule set for product-name canonicalization.
///
/// The passes in [`Normalizer::clean`] are order-sensitive: each rule
/// assumes the output shape of the rule before it. All patterns are
/// compiled once here and the value is passed explicitly into the
/// pipeline; there is no global pattern state.
#[derive(Debug)]
pub struct Normalizer {
    symbol_runs: Regex,
    hyphens: Regex,
    parens: Regex,
    digit_then_letter: Regex,
    letter_then_digit: Regex,
    letter_then_dot: Regex,
    formula_triple: Regex,
    plus_before: Regex,
    plus_after: Regex,
    comma_before_letter: Regex,
    comma_after_letter: Regex,
    whitespace_runs: Regex,
    formula_find: Regex,
}

impl Normalizer {
    pub fn new() -> PipelineResult<Self> {
        Ok(Self {
            // Runs of anything outside the token alphabet become
            // space-delimited symbol tokens. `@`, quotes and similar
            // all fall in this class.
            symbol_runs: compile(r#"([^a-z0-9.,+\- ]+)"#)?,
            // Hyphens are in the token alphabet (decimals, signs) but
            // still get padded so "brand-x" splits into tokens.
            hyphens: compile(r"-")?,
            parens: compile(r"[()]")?,
            digit_then_letter: compile(r"([0-9])([a-z])")?,
            letter_then_digit: compile(r"([a-z])([0-9])")?,
            letter_then_dot: compile(r"([a-z])\.")?,
            // Exactly three chained numeric groups; a fourth group
            // cannot be swallowed because digits are not separators.
            formula_triple: compile(
                r"([0-9]+[.,]?[0-9]*)[x×+,.| -]+([0-9]+[.,]?[0-9]*)[x×+,.| -]+([0-9]+[.,]?[0-9]*)",
            )?,
            plus_before: compile(r"\+([a-z0-9])")?,
            plus_after: compile(r"([a-z0-9])\+")?,
            comma_before_letter: compile(r",([a-z])")?,
            comma_after_letter: compile(r"([a-z]),")?,
            whitespace_runs: compile(r"\s+")?,
            formula_find: compile(r"[0-9]+[.,]?[0-9]*x[0-9]+[.,]?[0-9]*x[0-9]+[.,]?[0-9]*")?,
        })
    }

    /// Canonicalizes a raw product string. Pure, total and
    /// deterministic; empty or whitespace-only output is valid.
    pub fn clean(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();

        let padded = self.symbol_runs.replace_all(&lowered, " $1 ");
        let padded = self.hyphens.replace_all(&padded, " - ");
        let stripped = self.parens.replace_all(&padded, "");

        let split = self.digit_then_letter.replace_all(&stripped, "$1 $2");
        let split = self.letter_then_digit.replace_all(&split, "$1 $2");
        let split = self.letter_then_dot.replace_all(&split, "$1 .");

        let canonical = self
            .formula_triple
            .replace_all(&split, "${1}x${2}x${3}");

        let signed = self.plus_before.replace_all(&canonical, "+ $1");
        let signed = self.plus_after.replace_all(&signed, "$1 +");
        let signed = self.comma_before_letter.replace_all(&signed, ", $1");
        let signed = self.comma_after_letter.replace_all(&signed, "$1 ,");

        self.whitespace_runs
            .replace_all(&signed, " ")
            .trim()
            .to_string()
    }

    /// Strips everything that is not a letter, digit or space from an
    /// already-cleaned string and re-collapses the spacing.
    pub fn alphanumeric_only(&self, clean: &str) -> String {
        let filtered: String = clean
            .chars()
            .filter(|character| character.is_ascii_alphanumeric() || *character == ' ')
            .collect();
        self.whitespace_runs
            .replace_all(&filtered, " ")
            .trim()
            .to_string()
    }

    /// The leading digit-free prefix of a cleaned string, filtered to
    /// alphanumerics. None when the string opens with a digit.
    pub fn non_formula_prefix(&self, clean: &str) -> Option<String> {
        let trimmed = clean.trim_start();
        if trimmed
            .chars()
            .next()
            .is_some_and(|character| character.is_ascii_digit())
        {
            return None;
        }

        let prefix: String = trimmed
            .chars()
            .take_while(|character| !character.is_ascii_digit())
            .collect();
        let filtered = self.alphanumeric_only(&prefix);
        if filtered.is_empty() {
            return None;
        }
        Some(filtered)
    }

    /// The first embedded `N1xN2xN3` formula in a cleaned string.
    pub fn formula(&self, clean: &str) -> Option<String> {
        self.formula_find
            .find(clean)
            .map(|found| found.as_str().to_string())
    }
}

pub fn is_only_alphanumeric(raw: &str) -> bool {
    raw.chars()
        .all(|character| character.is_ascii_alphanumeric() || character == ' ')
}

pub fn is_alphabetic_only(raw: &str) -> bool {
    raw.chars()
        .all(|character| character.is_ascii_alphabetic() || character == ' ')
}

fn compile(pattern: &str) -> PipelineResult<Regex> {
    Regex::new(pattern).map_err(|error| {
        PipelineError::new(
            "internal_pattern_compile",
            &format!("Normalizer pattern failed to compile: {error}"),
            Vec::new(),
        )
    })
}
