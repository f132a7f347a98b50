//! # Driver Client
//!
//! High-level API for the driver directory. Availability changes are sent as
//! [`DriverAction`]s and answered with the driver's new state.
use crate::clients::actor_client::ActorClient;
use crate::driver_actor::{DriverAction, DriverError};
use crate::framework::ResourceClient;
use crate::model::{Driver, DriverCreate, DriverId, DriverUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Driver actor.
#[derive(Clone)]
pub struct DriverClient {
    inner: ResourceClient<Driver>,
}

impl DriverClient {
    pub fn new(inner: ResourceClient<Driver>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_driver(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Driver, DriverError> {
        debug!("Sending request");
        let params = DriverCreate {
            name: name.to_string(),
            location: location.to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every driver, busy ones included, ordered by id.
    pub async fn list_drivers(&self) -> Result<Vec<Driver>, DriverError> {
        self.list().await
    }

    pub async fn list_available_drivers(&self) -> Result<Vec<Driver>, DriverError> {
        let drivers = self.list().await?;
        Ok(drivers.into_iter().filter(|d| d.available).collect())
    }

    #[instrument(skip(self))]
    pub async fn update_location(
        &self,
        id: DriverId,
        location: &str,
    ) -> Result<Driver, DriverError> {
        debug!("Sending request");
        let update = DriverUpdate {
            location: Some(location.to_string()),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Administrative override. Making a driver available fails with
    /// [`DriverError::Unavailable`] while they are on a ride.
    pub async fn set_availability(
        &self,
        id: DriverId,
        available: bool,
    ) -> Result<Driver, DriverError> {
        self.act(id, DriverAction::SetAvailability(available)).await
    }

    /// Marks the driver unavailable. Fails with [`DriverError::Unavailable`] if they
    /// already were.
    pub async fn reserve(&self, id: DriverId) -> Result<Driver, DriverError> {
        self.act(id, DriverAction::Reserve).await
    }

    pub async fn release(&self, id: DriverId) -> Result<Driver, DriverError> {
        self.act(id, DriverAction::Release).await
    }

    pub async fn finish_trip(&self, id: DriverId) -> Result<Driver, DriverError> {
        self.act(id, DriverAction::FinishTrip).await
    }

    #[instrument(skip(self))]
    async fn act(&self, id: DriverId, action: DriverAction) -> Result<Driver, DriverError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Driver> for DriverClient {
    type Error = DriverError;

    fn inner(&self) -> &ResourceClient<Driver> {
        &self.inner
    }
}
