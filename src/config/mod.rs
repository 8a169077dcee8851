use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

/// File name the report reads when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "inputs.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "currency-validator", version)]
#[command(about = "Checks each line of a file against the Brazilian currency amount format")]
pub struct CliConfig {
    #[arg(default_value = DEFAULT_INPUT_PATH, help = "Text file with one amount per line")]
    pub input: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", self.input_path())
    }
}
