use clap::Parser;
use currency_validator::core::ConfigProvider;
use currency_validator::utils::{logger, validation::Validate};
use currency_validator::{CliConfig, ReportEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let engine = ReportEngine::default();
    let stdout = std::io::stdout();

    if let Err(e) = engine.run_file(config.input_path(), stdout.lock()) {
        tracing::error!("Report failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
