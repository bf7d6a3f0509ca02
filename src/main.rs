// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use clap::Parser;
use katakana_lib::cli::{self, Cli, CliError, Command, StderrNotifier};
use katakana_lib::target::HOTKEY;
use katakana_lib::{debug, info, startup, LookupService};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let settings = args.resolve_settings()?;
    let source = settings.source()?;
    info!("Using dictionary {:?}", source.path());
    if settings.remote_refresh {
        info!("Refreshing from {}", source.url());
    }
    debug!("Input box hotkey: {}", HOTKEY);

    let lookup = LookupService::new();
    let refresh = startup::start(
        source,
        lookup.clone(),
        Arc::new(StderrNotifier),
        settings.remote_refresh,
    );

    match args.command {
        Some(Command::Lookup { terms }) => {
            // One-shot lookups answer against the freshest dictionary available
            if let Some(handle) = refresh {
                handle
                    .await
                    .map_err(|e| CliError::Refresh(e.to_string()))?;
            }
            cli::run_lookup(&lookup, &terms, &mut std::io::stdout().lock())?;
        }
        Some(Command::Route { title }) => {
            cli::run_route(&title, &mut std::io::stdout().lock())?;
        }
        None => {
            let answered = tokio::task::block_in_place(|| {
                cli::run_repl(&lookup, std::io::stdin().lock(), &mut std::io::stdout())
            })?;
            info!("Answered {} queries", answered);
        }
    }

    Ok(())
}
