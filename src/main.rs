//! # Ride Dispatch
//!
//! Interactive ride-booking console. Register riders and drivers, book rides, complete
//! or cancel them, all in memory.
//!
//! ```bash
//! cargo run -- --matching least-active --fare peak-hour
//! RUST_LOG=info cargo run
//! ```
//!
//! Flags override `RIDE_MATCHING`, `RIDE_FARE` and `RIDE_ACTOR_BUFFER` (see
//! [`RideConfig`]).

use clap::Parser;
use ride_dispatch::console::Console;
use ride_dispatch::lifecycle::{setup_tracing, RideConfig, RideSystem};
use ride_dispatch::strategy::{FareKind, MatchingKind};
use tokio::io::BufReader;
use tracing::info;

/// Ride Dispatch - in-memory ride booking with pluggable matching and pricing.
#[derive(Parser, Debug)]
#[command(name = "ride-dispatch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Driver matching strategy
    #[arg(long, value_enum)]
    matching: Option<MatchingKind>,

    /// Fare strategy
    #[arg(long, value_enum)]
    fare: Option<FareKind>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Request queue capacity of each actor
    #[arg(long)]
    buffer_size: Option<usize>,
}

impl Cli {
    fn apply(&self, config: &mut RideConfig) {
        if let Some(matching) = self.matching {
            config.matching = matching;
        }
        if let Some(fare) = self.fare {
            config.fare = fare;
        }
        if let Some(buffer_size) = self.buffer_size.filter(|n| *n > 0) {
            config.buffer_size = buffer_size;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing(cli.log_level.as_deref());

    let mut config = RideConfig::from_env().map_err(|e| e.to_string())?;
    cli.apply(&mut config);
    info!(?config, "Configuration loaded");

    let system = RideSystem::new(&config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(stdin, tokio::io::stdout());
    let session = console.run(&system).await.map_err(|e| e.to_string());

    // Shutdown system gracefully, even if the console failed
    system.shutdown().await?;
    session
}
