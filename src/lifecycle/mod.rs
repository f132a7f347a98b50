//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the actors, plus the process-wide concerns that
//! come with them: configuration and tracing.
//!
//! ## The RideSystem Pattern
//!
//! [`RideSystem::new`] creates every actor first and injects dependencies afterwards:
//!
//! ```rust,ignore
//! // 1. Create actors (no dependencies yet)
//! let (rider_actor, rider_client) = rider_actor::new(32);
//! let (driver_actor, driver_client) = driver_actor::new(32);
//! let (ride_actor, ride_client) = ride_actor::new(32);
//!
//! // 2. Start actors with their dependencies injected
//! tokio::spawn(rider_actor.run(()));
//! tokio::spawn(driver_actor.run(()));
//! tokio::spawn(ride_actor.run(RideContext::new(
//!     rider_client.clone(),
//!     driver_client.clone(),
//!     matching,
//!     fare,
//! )));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - ride actor first, then the directories
//!
//! The dependency graph is acyclic (rides depend on riders and drivers, never the other
//! way round), so channel closure is enough to stop everything.
//!
//! ## Configuration
//!
//! [`RideConfig::from_env`] reads `RIDE_MATCHING`, `RIDE_FARE` and `RIDE_ACTOR_BUFFER`.
//! See the [`config`] module.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging. See the [`tracing`] module.

pub mod config;
pub mod ride_system;
pub mod tracing;

pub use config::*;
pub use ride_system::*;
pub use self::tracing::setup_tracing;
