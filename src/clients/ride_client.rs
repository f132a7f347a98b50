//! # Ride Client
//!
//! Provides a high-level API for interacting with the `Ride` actor.
//!
//! Matching, pricing and driver bookkeeping all happen inside the actor. This client
//! turns the actor's answers into the shapes callers want: completing or cancelling a
//! ride that does not exist, or is in the wrong state, is a no-op reported as `None` or
//! `false` rather than an error.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{FareReceipt, Ride, RideCreate, RideId, RiderId, VehicleType};
use crate::ride_actor::{RideAction, RideActionResult, RideError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Ride actor.
#[derive(Clone)]
pub struct RideClient {
    inner: ResourceClient<Ride>,
}

impl RideClient {
    pub fn new(inner: ResourceClient<Ride>) -> Self {
        Self { inner }
    }

    /// Books a ride. The returned ride is `Assigned` and its driver is now unavailable.
    ///
    /// # Errors
    /// - [`RideError::NoDriverAvailable`] if matching found nobody. Nothing is recorded.
    /// - [`RideError::RiderNotFound`] for an unknown rider.
    /// - [`RideError::InvalidDistance`] for a distance that is not positive and finite.
    #[instrument(skip(self))]
    pub async fn request_ride(
        &self,
        rider_id: RiderId,
        distance_km: f64,
        vehicle: VehicleType,
    ) -> Result<Ride, RideError> {
        info!("Sending request_ride to actor");
        let params = RideCreate {
            rider_id,
            distance_km,
            vehicle,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Completes an assigned ride and returns its receipt.
    ///
    /// `Ok(None)` if the ride does not exist or is not `Assigned`. Nothing changes then.
    #[instrument(skip(self))]
    pub async fn complete_ride(&self, id: RideId) -> Result<Option<FareReceipt>, RideError> {
        debug!("Sending request");
        match self.inner.perform_action(id, RideAction::Complete).await {
            Ok(RideActionResult::Completed(receipt)) => Ok(Some(receipt)),
            Ok(RideActionResult::Unchanged(status)) => {
                info!(%status, "Ride not completable, left unchanged");
                Ok(None)
            }
            Ok(other) => Err(RideError::ActorCommunicationError(format!(
                "unexpected reply to Complete: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => {
                warn!("Ride not found, nothing to complete");
                Ok(None)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Cancels a requested or assigned ride.
    ///
    /// `Ok(false)` if the ride does not exist or is already `Completed` or `Cancelled`.
    #[instrument(skip(self))]
    pub async fn cancel_ride(&self, id: RideId) -> Result<bool, RideError> {
        debug!("Sending request");
        match self.inner.perform_action(id, RideAction::Cancel).await {
            Ok(RideActionResult::Cancelled) => Ok(true),
            Ok(RideActionResult::Unchanged(status)) => {
                info!(%status, "Ride not cancellable, left unchanged");
                Ok(false)
            }
            Ok(other) => Err(RideError::ActorCommunicationError(format!(
                "unexpected reply to Cancel: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => {
                warn!("Ride not found, nothing to cancel");
                Ok(false)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every ride, ordered by id.
    pub async fn list_rides(&self) -> Result<Vec<Ride>, RideError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Ride> for RideClient {
    type Error = RideError;

    fn inner(&self) -> &ResourceClient<Ride> {
        &self.inner
    }
}
