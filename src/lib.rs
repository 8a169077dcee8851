#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::core::{
    grammar::{matches_grammar, GrammarValidator},
    report::ReportEngine,
    validator::{is_valid_amount, validate_line, RegexValidator},
};
pub use domain::model::{ReportLine, ReportSummary, Verdict};
pub use utils::error::{Result, ValidatorError};
