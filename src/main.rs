// Entrypoint for the CLI application.
// - Resolves the configuration; a missing home directory is the only fatal
//   startup error.
// - Everything else is reported by `ui` and ends with a normal exit.

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use listify_cli::prompt::{self, LinePrompter, TerminalPrompter};
use listify_cli::{api::ApiClient, cli::Cli, config::Config, ui};

/// Logs go to stderr so stdout only carries command output.
/// `RUST_LOG` controls the level (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match Config::resolve(cli.api_url, cli.timeout.map(Duration::from_secs)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    tracing::debug!(base_url = %config.base_url, "configuration resolved");

    let api = ApiClient::new(&config)?;
    let message = if prompt::interactive() {
        ui::run(&api, cli.command, &mut TerminalPrompter)?
    } else {
        ui::run(&api, cli.command, &mut LinePrompter::new(io::stdin().lock(), io::stdout()))?
    };
    println!("{}", message);
    Ok(())
}
