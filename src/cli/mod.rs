mod commands;
pub mod error;
mod utils;

#[cfg(test)]
mod utils_test;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::error::{CliError, CliResult};
use crate::store::{CollectionSource, RestStore, StoreConfig};

#[derive(Parser)]
#[command(name = "jht")]
#[command(author, version, about = "Browse Jharkhand tourism listings", long_about = None)]
pub struct Cli {
    /// Backend URL (default: SUPABASE_URL env)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Backend anon key (default: SUPABASE_ANON_KEY env)
    #[arg(long, global = true)]
    pub anon_key: Option<String>,

    /// Request timeout in seconds (default: JHT_REQUEST_TIMEOUT_SECS env, or none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List destinations, newest first
    Destinations {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List events, soonest first
    Events {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List marketplace products
    Products {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "jharkhand_tourism=info",
        1 => "jharkhand_tourism=debug",
        _ => "jharkhand_tourism=trace",
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Resolve store configuration: flag > env.
///
/// The timeout variable is only read when `--timeout` is absent.
fn store_config(cli: &Cli) -> CliResult<StoreConfig> {
    let mut config = StoreConfig::connection_from_env();
    if let Some(url) = &cli.url {
        config = config.with_url(url);
    }
    if let Some(key) = &cli.anon_key {
        config = config.with_anon_key(key);
    }
    let timeout = match cli.timeout {
        Some(secs) => Some(Duration::from_secs(secs)),
        None => StoreConfig::timeout_from_env()?,
    };
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }
    Ok(config)
}

/// Run one listing command. A cancelled scope is an error, not empty output.
async fn dispatch<S: CollectionSource>(
    command: &Commands,
    store: &S,
    token: &CancellationToken,
) -> CliResult<String> {
    let output = match command {
        Commands::Destinations { format } => {
            commands::destination::list_destinations(store, token, format).await?
        }
        Commands::Events { format } => commands::event::list_events(store, token, format).await?,
        Commands::Products { format } => {
            commands::product::list_products(store, token, format).await?
        }
    };
    output.ok_or(CliError::Interrupted)
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["jht", "--help"]);
        return Ok(());
    };

    let store = RestStore::new(store_config(&cli)?)?;

    // Ctrl-C ends the scope; an unsettled listing is discarded
    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupted");
            interrupt.cancel();
        }
    });

    println!("{}", dispatch(command, &store, &token).await?);
    Ok(())
}
