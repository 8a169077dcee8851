//! Regex-backed amount validation.
//!
//! The pattern is compiled on first use and cached in a `OnceLock`; every
//! later call reuses the same immutable `Regex`.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ports::LineValidator;

/// `0`, 1–3 digits without a leading zero, or a 1–2 digit lead followed by `.ddd` groups.
const INTEGER_PART: &str = r"(?:0|[1-9][0-9]{0,2}|[1-9][0-9]?(?:\.[0-9]{3})+)";
const FRACTIONAL_PART: &str = r"[0-9]{2,}";
const SYMBOL: &str = r"(?:\$|[A-Za-z]+\$?)";

static AMOUNT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn plain_amount() -> String {
    format!("{INTEGER_PART},{FRACTIONAL_PART}")
}

fn amount_pattern() -> &'static Regex {
    AMOUNT_PATTERN.get_or_init(|| {
        let amount = plain_amount();
        Regex::new(&format!(
            r"^{SYMBOL}?(?:-{amount}|\({amount}\)|{amount})$"
        ))
        .expect("valid currency amount regex")
    })
}

/// Whole-string match of an already-trimmed line.
pub fn is_valid_amount(line: &str) -> bool {
    amount_pattern().is_match(line)
}

/// Trims surrounding whitespace, then validates.
pub fn validate_line(line: &str) -> bool {
    is_valid_amount(line.trim())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegexValidator;

impl LineValidator for RegexValidator {
    fn is_valid(&self, line: &str) -> bool {
        is_valid_amount(line)
    }
}
