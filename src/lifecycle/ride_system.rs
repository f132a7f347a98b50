use crate::clients::{DriverClient, RideClient, RiderClient};
use crate::lifecycle::RideConfig;
use crate::ride_actor::RideContext;
use tracing::{error, info};

/// The runtime orchestrator for the ride-booking system.
///
/// `RideSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the three actors
/// - **Dependency Wiring**: handing the ride actor its directory clients and strategies
///
/// # Architecture
///
/// - **Rider Actor**: the rider directory
/// - **Driver Actor**: the driver directory, and sole owner of driver availability
/// - **Ride Actor**: the ride ledger; matches, prices, and drives the ride lifecycle
///
/// # Example
///
/// ```ignore
/// let system = RideSystem::new(&RideConfig::default());
///
/// let rider = system.rider_client.register_rider("Asha", "Koramangala").await?;
/// system.driver_client.register_driver("Ravi", "Hebbal").await?;
/// let ride = system.ride_client.request_ride(rider.id, 10.0, VehicleType::Car).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RideSystem {
    /// Client for interacting with the Rider actor
    pub rider_client: RiderClient,

    /// Client for interacting with the Driver actor
    pub driver_client: DriverClient,

    /// Client for interacting with the Ride actor
    pub ride_client: RideClient,

    /// Actor task handles, ride actor first (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RideSystem {
    /// Creates the three actors, wires them, and spawns each on its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &RideConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (rider_actor, rider_client) = crate::rider_actor::new(config.buffer_size);
        let (driver_actor, driver_client) = crate::driver_actor::new(config.buffer_size);
        let (ride_actor, ride_client) = crate::ride_actor::new(config.buffer_size);

        // 2. Start actors with injected context
        let rider_handle = tokio::spawn(rider_actor.run(()));
        let driver_handle = tokio::spawn(driver_actor.run(()));

        let matching = config.matching.build();
        let fare = config.fare.build();
        info!(matching = matching.name(), fare = fare.name(), "Starting ride system");
        let context = RideContext::new(rider_client.clone(), driver_client.clone(), matching, fare);
        let ride_handle = tokio::spawn(ride_actor.run(context));

        Self {
            rider_client,
            driver_client,
            ride_client,
            handles: vec![ride_handle, rider_handle, driver_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the request channels. The ride actor exits first; its
    /// context holds the last directory client clones, so the directories follow.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.ride_client);
        drop(self.rider_client);
        drop(self.driver_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
