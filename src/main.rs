use clap::Parser;
use update_suite::core::ConfigProvider;
use update_suite::utils::logger::{self, LogFormat};
use update_suite::utils::validation::Validate;
use update_suite::{CliConfig, SuiteError, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, cli.verbose);

    tracing::info!("Starting update-suite");
    tracing::debug!("CLI config: {:?}", cli);

    let dry_run = cli.dry_run;
    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => execute(config, dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => execute(cli, dry_run).await,
    };

    if let Err(e) = outcome {
        tracing::error!("Run failed: {} (Category: {:?})", e, e.category());
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn execute<C: ConfigProvider + Validate>(config: C, dry_run: bool) -> Result<(), SuiteError> {
    config.validate()?;

    if dry_run {
        tracing::info!("Dry run, nothing will be written");
        let suite = update_suite::preview(config).await?;
        println!("✅ Parsed {} test cases from the feed", suite.len());
        return Ok(());
    }

    let output_path = update_suite::run(config).await?;
    println!("✅ Test suite updated");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}
