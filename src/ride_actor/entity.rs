//! [`ActorEntity`] implementation for [`Ride`].
//!
//! This is where rides are orchestrated. The ride actor processes one request at a time,
//! so everything below runs as a single critical section with respect to other ride
//! requests:
//!
//! - `on_create` validates the request, looks up the rider, runs the matching strategy
//!   over the current driver pool and reserves the chosen driver. If any step fails the
//!   ride is never stored.
//! - `handle_action` completes or cancels a ride and keeps the driver directory in step.

use super::{RideAction, RideActionResult, RideError};
use crate::clients::{ActorClient, DriverClient, RiderClient};
use crate::driver_actor::DriverError;
use crate::framework::ActorEntity;
use crate::model::{FareReceipt, Ride, RideCreate, RideId};
use crate::strategy::{FareStrategy, NoDriverAvailable, RideMatchingStrategy};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// How many times matching is retried when the chosen driver was reserved by someone
/// else between listing the pool and reserving.
pub const MAX_MATCH_ATTEMPTS: u32 = 3;

/// Dependencies injected into the ride actor by `run()`.
#[derive(Clone)]
pub struct RideContext {
    pub riders: RiderClient,
    pub drivers: DriverClient,
    pub matching: Arc<dyn RideMatchingStrategy>,
    pub fare: Arc<dyn FareStrategy>,
}

impl RideContext {
    pub fn new(
        riders: RiderClient,
        drivers: DriverClient,
        matching: Arc<dyn RideMatchingStrategy>,
        fare: Arc<dyn FareStrategy>,
    ) -> Self {
        Self {
            riders,
            drivers,
            matching,
            fare,
        }
    }
}

#[async_trait]
impl ActorEntity for Ride {
    type Id = RideId;
    type Create = RideCreate;
    type Update = ();
    type Action = RideAction;
    type ActionResult = RideActionResult;
    type Context = RideContext;
    type Error = RideError;

    /// Builds the ride in `Requested`. Rejects distances that are not positive and finite.
    fn from_create_params(id: RideId, params: RideCreate) -> Result<Self, RideError> {
        if !params.distance_km.is_finite() || params.distance_km <= 0.0 {
            return Err(RideError::InvalidDistance(params.distance_km));
        }
        Ok(Ride::new(id, params.rider_id, params.distance_km, params.vehicle))
    }

    /// Matches the ride to a driver and reserves them.
    ///
    /// Reservation is a compare-and-set on the driver actor. If it loses a race the pool
    /// is listed again and matching reruns, up to [`MAX_MATCH_ATTEMPTS`] times.
    async fn on_create(&mut self, ctx: &RideContext) -> Result<(), RideError> {
        let rider = ctx
            .riders
            .get(self.rider_id)
            .await?
            .ok_or(RideError::RiderNotFound(self.rider_id))?;

        for attempt in 1..=MAX_MATCH_ATTEMPTS {
            let pool = ctx.drivers.list_drivers().await?;
            let driver_id = ctx.matching.find_driver(&rider, &pool)?.id;

            match ctx.drivers.reserve(driver_id).await {
                Ok(_) => {
                    self.assign(driver_id);
                    info!(
                        ride_id = %self.id,
                        rider_id = %self.rider_id,
                        driver_id = %driver_id,
                        strategy = ctx.matching.name(),
                        "Driver matched"
                    );
                    return Ok(());
                }
                Err(DriverError::Unavailable(taken)) => {
                    warn!(ride_id = %self.id, driver_id = %taken, attempt, "Driver already taken");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(NoDriverAvailable::new(format!(
            "every chosen driver was taken ({MAX_MATCH_ATTEMPTS} attempts)"
        ))
        .into())
    }

    async fn on_update(&mut self, _update: (), _ctx: &RideContext) -> Result<(), RideError> {
        Ok(())
    }

    /// Completes or cancels the ride.
    ///
    /// # Actions
    /// - `Complete` on an `Assigned` ride: fare is computed, the driver finishes the trip,
    ///   then the receipt is attached. Any other status is left unchanged.
    /// - `Cancel` on a `Requested` or `Assigned` ride: the driver, if any, is released.
    ///   `Completed` and `Cancelled` rides are left unchanged.
    ///
    /// The driver is updated before the ride, so a failed driver call leaves the ride as
    /// it was.
    async fn handle_action(
        &mut self,
        action: RideAction,
        ctx: &RideContext,
    ) -> Result<RideActionResult, RideError> {
        match action {
            RideAction::Complete => {
                if !self.status.can_complete() {
                    return Ok(RideActionResult::Unchanged(self.status));
                }
                let driver_id = self.driver_id.ok_or(RideError::MissingDriver(self.id))?;
                let amount = ctx.fare.calculate_fare(self);
                ctx.drivers.finish_trip(driver_id).await?;

                let receipt = FareReceipt::new(self.id, amount);
                self.complete(receipt.clone());
                info!(
                    ride_id = %self.id,
                    driver_id = %driver_id,
                    amount,
                    strategy = ctx.fare.name(),
                    "Ride completed"
                );
                Ok(RideActionResult::Completed(receipt))
            }
            RideAction::Cancel => {
                if !self.status.can_cancel() {
                    return Ok(RideActionResult::Unchanged(self.status));
                }
                if let Some(driver_id) = self.driver_id {
                    ctx.drivers.release(driver_id).await?;
                }
                self.cancel();
                info!(ride_id = %self.id, "Ride cancelled");
                Ok(RideActionResult::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiderId, VehicleType};

    fn params(distance_km: f64) -> RideCreate {
        RideCreate {
            rider_id: RiderId(1),
            distance_km,
            vehicle: VehicleType::Bike,
        }
    }

    #[test]
    fn distance_must_be_positive_and_finite() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = Ride::from_create_params(RideId(1), params(bad)).unwrap_err();
            assert!(matches!(err, RideError::InvalidDistance(_)));
        }
        assert!(Ride::from_create_params(RideId(1), params(0.1)).is_ok());
    }
}
