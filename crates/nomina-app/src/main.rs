use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nomina_config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod session;
pub mod state;


use self::cli::{Cli, Commands};
use self::session::Session;
use self::state::AppState;

fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::new().context("invalid environment configuration")?,
    };
    cli.apply(&mut config);

    init_logging(config.log_format);

    let state = AppState::from_config(&config).context("failed to load lookup tables")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            Session::new(&state, stdin.lock(), &mut out).run()?;
            true
        }
        Commands::Translate { country, language } => {
            commands::translate_once(&state, &country, &language, &mut out)?
        }
        Commands::Countries => {
            commands::list_countries(&state, &mut out)?;
            true
        }
        Commands::Languages { country } => commands::list_languages(&state, &country, &mut out)?,
        Commands::Codes { languages } => {
            let table = if languages {
                &state.languages
            } else {
                &state.countries
            };
            commands::list_codes(table, &mut out)?;
            true
        }
    };
    out.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
    }
}
