use clap::Parser;
use vibesort::utils::error::ErrorSeverity;
use vibesort::utils::logger;
use vibesort::utils::validation::{numbers_from_json, Validate};
use vibesort::{CliConfig, EnvConfig, OpenAiSorter, SortEngine, SortError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vibesort CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let numbers = match parse_input(&cli.input) {
        Ok(numbers) => numbers,
        Err(e) => {
            tracing::error!("❌ Input validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let mut config = EnvConfig::load()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let engine = SortEngine::new(OpenAiSorter::new(config));

    match engine.sort(&numbers).await {
        Ok(sorted) => {
            tracing::info!("✅ Sort completed successfully!");
            println!("{}", serde_json::to_string(&sorted)?);
        }
        Err(e) => {
            tracing::error!(
                "❌ Sort failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn parse_input(input: &str) -> Result<Vec<f64>, SortError> {
    let value = serde_json::from_str::<serde_json::Value>(input)
        .map_err(|_| SortError::invalid_input("input must be an array of numbers"))?;
    numbers_from_json(&value)
}
