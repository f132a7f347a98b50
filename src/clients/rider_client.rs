//! # Rider Client
//!
//! High-level API for the rider directory.
use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Rider, RiderCreate, RiderId, RiderUpdate};
use crate::rider_actor::RiderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Rider actor.
#[derive(Clone)]
pub struct RiderClient {
    inner: ResourceClient<Rider>,
}

impl RiderClient {
    pub fn new(inner: ResourceClient<Rider>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_rider(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Rider, RiderError> {
        debug!("Sending request");
        let params = RiderCreate {
            name: name.to_string(),
            location: location.to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn list_riders(&self) -> Result<Vec<Rider>, RiderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn update_location(&self, id: RiderId, location: &str) -> Result<Rider, RiderError> {
        debug!("Sending request");
        let update = RiderUpdate {
            location: Some(location.to_string()),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Rider> for RiderClient {
    type Error = RiderError;

    fn inner(&self) -> &ResourceClient<Rider> {
        &self.inner
    }
}
