//! # Ride Dispatch
//!
//! An in-memory ride-booking system built from resource-oriented actors on Tokio.
//!
//! Riders and drivers are registered in directories, rides are matched to drivers by a
//! pluggable [`RideMatchingStrategy`](strategy::RideMatchingStrategy), and completed
//! rides are priced by a pluggable [`FareStrategy`](strategy::FareStrategy).
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per collection
//! Riders, drivers and rides each live in a generic [`ResourceActor`](framework::ResourceActor)
//! running on its own Tokio task. An actor processes one request at a time, so a ride
//! request (look up the rider, list drivers, match, reserve, record) cannot interleave
//! with another.
//!
//! ### 2. Typed errors
//! Each actor has its own error enum (`RiderError`, `DriverError`, `RideError`). Errors
//! cross the actor boundary boxed inside [`FrameworkError`](framework::FrameworkError)
//! and are downcast back by the clients, so callers can match on
//! `RideError::NoDriverAvailable` directly.
//!
//! ### 3. Context injection
//! The ride actor depends on both directories and both strategies. They are injected via
//! `run(context)` after every actor has been constructed.
//!
//! ### 4. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic actor, client, and mocks for tests
//! - [`model`] - `Rider`, `Driver`, `Ride`, `FareReceipt`, `VehicleType`
//! - [`strategy`] - matching and fare strategies
//! - [`rider_actor`], [`driver_actor`], [`ride_actor`] - the three actors
//! - [`clients`] - domain clients wrapping `ResourceClient`
//! - [`lifecycle`] - [`RideSystem`](lifecycle::RideSystem), configuration, tracing
//! - [`console`] - the interactive menu
//!
//! ## Quick Start
//!
//! ```rust
//! use ride_dispatch::lifecycle::{RideConfig, RideSystem};
//! use ride_dispatch::model::VehicleType;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = RideSystem::new(&RideConfig::default());
//!
//!     let rider = system.rider_client.register_rider("Asha", "Koramangala").await?;
//!     system.driver_client.register_driver("Ravi", "Hebbal").await?;
//!
//!     let ride = system.ride_client.request_ride(rider.id, 10.0, VehicleType::Car).await?;
//!     let receipt = system.ride_client.complete_ride(ride.id).await?;
//!     assert_eq!(receipt.map(|r| r.amount()), Some(230.0));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod console;
pub mod driver_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod ride_actor;
pub mod rider_actor;
pub mod strategy;
