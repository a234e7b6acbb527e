//! osdoctor - Command-line diagnostics for OpenSearch clusters.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the cluster client and diagnostics facade from configuration.
//! - Print diagnostic text blocks and translate them into exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Diagnostic computation and rendering (see `crates/diag`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.
//! - Configuration failures exit with code 2 before any request is sent;
//!   operation failures exit with code 1 after printing the error block.

mod args;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Commands};
use dispatch::run_command;
use error::ExitCode;
use opensearch_client::OpenSearchClient;
use opensearch_config::{Config, ConfigError, ConfigLoader};
use opensearch_diag::Diagnostics;

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    // Diagnostic output goes to stdout; logs stay on stderr so scripts can
    // parse results without filtering
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Completion scripts need no cluster connection or credentials
    if let Commands::Completions { shell } = &cli.command {
        commands::completions::run(*shell);
        std::process::exit(ExitCode::Success.as_i32());
    }

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let client = match OpenSearchClient::builder().from_config(&config).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build client: {}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    tracing::info!("Connecting to {}", client.base_url());

    let mut diag = Diagnostics::new(client);
    if let Some(base_url) = config.dashboards.base_url {
        diag = diag.with_dashboards_url(base_url);
    }

    let exit_code = run_command(cli.command, &diag).await;
    std::process::exit(exit_code.as_i32());
}

/// Merge CLI flags over environment variables into a validated config.
///
/// Flags are applied first; `from_env` only fills fields still unset, which
/// gives the flag layer precedence.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref dashboards_url) = cli.dashboards_url {
        loader = loader.with_dashboards_url(dashboards_url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.from_env()?.build()
}
