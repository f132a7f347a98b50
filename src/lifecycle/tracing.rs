//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! process.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG`, unless the binary passes `--log-level`, which wins.
//! The crate/module prefix is hidden (`with_target(false)`): actor log lines carry an
//! `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # matches, completions, cancellations
//! RUST_LOG=debug cargo run     # every request with its payload
//! cargo run -- --log-level warn
//! ```
//!
//! ## Workflow Trace Example
//!
//! Requesting and completing one ride at `debug`:
//!
//! ```text
//! DEBUG request_ride: Create entity_type="Ride" params=RideCreate { rider_id: RiderId(1), distance_km: 10.0, vehicle: Car }
//! DEBUG Get entity_type="Rider" id=rider_1 found=true
//! DEBUG List entity_type="Driver" size=2
//! DEBUG Action entity_type="Driver" id=driver_2 action=Reserve
//!  INFO Action ok entity_type="Driver" id=driver_2
//!  INFO request_ride: Driver matched ride_id=ride_1 rider_id=rider_1 driver_id=driver_2 strategy="nearest"
//!  INFO request_ride: Created entity_type="Ride" id=ride_1 size=1
//! DEBUG Action entity_type="Ride" id=ride_1 action=Complete
//!  INFO Action ok entity_type="Driver" id=driver_2
//!  INFO complete_ride: Ride completed ride_id=ride_1 driver_id=driver_2 amount=230.0 strategy="default"
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level` overrides `RUST_LOG` when given; with neither, only warnings and errors are
/// shown so the console menu stays readable. Calling it a second time is a no-op.
pub fn setup_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
