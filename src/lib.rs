//! rTimeclock library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! store / ledger modules used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::In { .. } | Commands::Out { .. } | Commands::Note { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `-v` forces debug, otherwise `RUST_LOG`
/// (default `warn`).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rtimeclock=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a second init (tests) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // config is loaded once; init writes its own
    let mut cfg = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom) = &cli.data {
        cfg.data_dir = custom.clone();
    }

    tracing::debug!(data_dir = %cfg.data_dir, "configuration loaded");
    dispatch(&cli, &cfg)
}
