//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load `.env` and read configuration
//! 2. Connect to the document store (or create the in-memory one)
//! 3. Bind the HTTP listener and serve until Ctrl-C
//!
//! Any failure before serving is fatal.

use crate::config::{self, env_lookup};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::store::{StoreConfig, StoreContext};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Serve {
            host,
            port,
            in_memory,
        } => serve(host, port, in_memory),
        Command::Check => check(),
    };

    // The only report of a failed command; main.rs just sets the exit code
    if let Err(e) = &result {
        Logger::fatal(Event::BootFailed.as_str(), &failure_fields(e));
    }
    result
}

fn failure_fields(e: &CliError) -> [(&'static str, &str); 2] {
    [("code", e.code_str()), ("message", e.message())]
}

/// Connect to the store and serve the HTTP API until Ctrl-C
pub fn serve(host: Option<String>, port: Option<u16>, in_memory: bool) -> CliResult<()> {
    log_event(Event::BootStart);
    config::load_dotenv();

    let http_config = resolve_server_config(env_lookup, host, port)?;
    let store_config = if in_memory {
        None
    } else {
        Some(config::store_config(env_lookup)?)
    };

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", http_config.socket_addr().as_str()),
            (
                "store",
                store_config
                    .as_ref()
                    .map(|c| c.database.as_str())
                    .unwrap_or("memory"),
            ),
        ],
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = match &store_config {
            Some(c) => connect(c).await?,
            None => StoreContext::in_memory(),
        };

        HttpServer::new(http_config, store)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate configuration and ping the document store
pub fn check() -> CliResult<()> {
    config::load_dotenv();

    config::server_config(env_lookup)?;
    let store_config = config::store_config(env_lookup)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(connect(&store_config))?;

    println!("ok: {}", store_config.database);
    Ok(())
}

async fn connect(config: &StoreConfig) -> CliResult<StoreContext> {
    let store = StoreContext::connect(config).await?;
    log_event_with_fields(Event::StoreConnected, &[("database", config.database.as_str())]);
    Ok(store)
}

/// Environment settings with command line overrides applied
fn resolve_server_config<F>(
    lookup: F,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = config::server_config(lookup)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("--port must be between 1 and 65535"));
        }
        config.port = port;
    }
    Ok(config)
}
