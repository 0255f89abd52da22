use clap::Parser;
use foursomes::app::commands::run_command;
use foursomes::utils::error::ErrorSeverity;
use foursomes::utils::logger::{self, LogFormat};
use foursomes::{CliConfig, Command, EventSession, RestPlayerStore, StdinConfirmation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(config.json_logs), config.verbose);

    tracing::info!("Starting foursomes CLI");
    if config.verbose {
        tracing::debug!("CLI command: {:?}", config.command);
    }

    let (settings, seed) = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let store = RestPlayerStore::new(&settings)?;
    let mut session = match seed {
        Some(seed) => EventSession::seeded(store, seed),
        None => EventSession::new(store),
    };

    let assume_yes = matches!(config.command, Command::Remove { yes: true, .. });
    let confirmation = StdinConfirmation::new(assume_yes);

    match run_command(&mut session, &config.command, &confirmation).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
