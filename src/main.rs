//! Traffic Control Advisor
//!
//! Recommends an intersection control method from four directional vehicle
//! counts.
//!
//! # Architecture Overview
//!
//! ```text
//!   counts (CLI args or ?north=&east=&south=&west=)
//!      │
//!      ▼
//!   ┌─────────────┐   ┌─────────────┐   ┌──────────────┐   ┌────────────────┐
//!   │ total_volume│──▶│  classify   │──▶│ method table │──▶│  select_best   │
//!   └─────────────┘   └─────────────┘   └──────────────┘   └───────┬────────┘
//!                                                                  │
//!                              "<A> or <B> is most efficient"  ◀───┘
//! ```
//!
//! Without a subcommand the binary evaluates a fixed example intersection
//! (5, 5, 5, 0) and prints the recommended method names one per line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use traffic_advisor::advisor::{write_names, Advice, DirectionalCounts, EXAMPLE_COUNTS};
use traffic_advisor::config::load_or_default;
use traffic_advisor::lifecycle::{wait_for_signal, Shutdown};
use traffic_advisor::observability::{logging, metrics};
use traffic_advisor::HttpServer;

#[derive(Parser)]
#[command(name = "traffic-advisor", version)]
#[command(about = "Recommends a traffic control method from intersection counts", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate custom counts
    Advise {
        #[arg(long, allow_negative_numbers = true)]
        north: i64,
        #[arg(long, allow_negative_numbers = true)]
        east: i64,
        #[arg(long, allow_negative_numbers = true)]
        south: i64,
        #[arg(long, allow_negative_numbers = true)]
        west: i64,
    },
    /// Run the HTTP service
    Serve {
        /// Overrides listener.bind_address.
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    match cli.command {
        None => {
            let advisor = config.advisor();
            print_advice(&advisor.advise(EXAMPLE_COUNTS))?;
        }
        Some(Commands::Advise {
            north,
            east,
            south,
            west,
        }) => {
            let advisor = config.advisor();
            print_advice(&advisor.advise(DirectionalCounts::new(north, east, south, west)))?;
        }
        Some(Commands::Serve { bind }) => {
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }
            serve(config).await?;
        }
    }

    Ok(())
}

fn print_advice(advice: &Advice<'_>) -> std::io::Result<()> {
    if advice.recommendation.best().is_none() {
        tracing::warn!(tier = %advice.tier, "No control method scored above zero");
    }
    write_names(advice, &mut std::io::stdout().lock())
}

async fn serve(config: traffic_advisor::AdvisorConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("traffic-advisor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        high_threshold = config.thresholds.high,
        medium_threshold = config.thresholds.medium,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
