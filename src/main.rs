use anyhow::{Context, Result};
use clap::Parser;
use healbuddy::app::App;
use healbuddy::cli::{Cli, Commands};
use healbuddy::{commands, logging, Config, HttpChecker};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint.clone() {
        config.backend.endpoint = endpoint;
    }

    let filter = logging::build_filter(config.logging.level.as_deref(), cli.verbose);
    let command = cli.command.unwrap_or(Commands::Tui);

    // The guard flushes the log writer on drop.
    let _guard = if command == Commands::Tui {
        Some(logging::init_file(&config.log_file(), filter)?)
    } else {
        logging::init_stderr(filter);
        None
    };

    let mut stdout = std::io::stdout();
    match command {
        Commands::InitConfig { force } => {
            let path = cli
                .config
                .or_else(Config::default_path)
                .context("Could not determine a config directory")?;
            commands::init_config(&path, force, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let checker = HttpChecker::new(&config.backend.endpoint)
                .with_context(|| format!("Bad endpoint '{}'", config.backend.endpoint))?;

            let ok = match command {
                Commands::Check { symptoms } => {
                    commands::check_once(&checker, &symptoms.join(" "), &mut stdout).await?
                }
                Commands::Status => commands::status(&checker, &mut stdout).await?,
                Commands::History { limit } => {
                    commands::history(&checker, limit, &mut stdout).await?;
                    true
                }
                _ => {
                    let mut app = App::new(config, Arc::new(checker));
                    app.run().await?;
                    true
                }
            };

            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
