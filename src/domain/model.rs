use std::fmt;

/// Minimum column width the echoed line is padded to.
pub const REPORT_COLUMN_WIDTH: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Valid => "VÁLIDO",
            Verdict::Invalid => "INVÁLIDO",
        }
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}

/// One classified, non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub verdict: Verdict,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$}  →  {}",
            self.text,
            self.verdict.label(),
            width = REPORT_COLUMN_WIDTH
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
}

impl ReportSummary {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Valid => self.valid += 1,
            Verdict::Invalid => self.invalid += 1,
        }
    }

    pub fn classified(&self) -> usize {
        self.valid + self.invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_pads_to_column_width() {
        let line = ReportLine {
            text: "1,00".to_string(),
            verdict: Verdict::Valid,
        };
        assert_eq!(line.to_string(), format!("1,00{}  →  VÁLIDO", " ".repeat(21)));
    }

    #[test]
    fn test_report_line_longer_than_width_is_not_truncated() {
        let text = "R$1.234.567.890.123.456,000000";
        let line = ReportLine {
            text: text.to_string(),
            verdict: Verdict::Invalid,
        };
        assert_eq!(line.to_string(), format!("{}  →  INVÁLIDO", text));
    }

    #[test]
    fn test_padding_counts_characters_not_bytes() {
        let line = ReportLine {
            text: "ção".to_string(),
            verdict: Verdict::Invalid,
        };
        let rendered = line.to_string();
        let column: String = rendered.chars().take(REPORT_COLUMN_WIDTH).collect();
        assert_eq!(column.trim_end(), "ção");
        assert!(rendered.ends_with("  →  INVÁLIDO"));
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = ReportSummary::default();
        summary.record(Verdict::Valid);
        summary.record(Verdict::Invalid);
        summary.record(Verdict::Invalid);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 2);
        assert_eq!(summary.classified(), 3);
        assert_eq!(Verdict::from(true), Verdict::Valid);
        assert_eq!(Verdict::from(false), Verdict::Invalid);
    }
}
