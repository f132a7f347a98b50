//! [`ActorEntity`] implementation for [`Driver`].
//!
//! Includes the availability actions used by the ride actor.

use super::{DriverAction, DriverError};
use crate::framework::ActorEntity;
use crate::model::{Driver, DriverCreate, DriverId, DriverUpdate};
use async_trait::async_trait;
use tracing::debug;

fn required(field: &str, value: &str) -> Result<String, DriverError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DriverError::ValidationError(format!("{field} must not be blank")));
    }
    Ok(value.to_string())
}

#[async_trait]
impl ActorEntity for Driver {
    type Id = DriverId;
    type Create = DriverCreate;
    type Update = DriverUpdate;
    type Action = DriverAction;
    type ActionResult = Driver;
    type Context = ();
    type Error = DriverError;

    /// Creates a new Driver, available and with no completed rides.
    fn from_create_params(id: DriverId, params: DriverCreate) -> Result<Self, DriverError> {
        let name = required("name", &params.name)?;
        let location = required("location", &params.location)?;
        Ok(Driver::new(id, name, location))
    }

    async fn on_update(&mut self, update: DriverUpdate, _ctx: &()) -> Result<(), DriverError> {
        if let Some(location) = update.location {
            self.location = required("location", &location)?;
        }
        Ok(())
    }

    /// Handles availability changes.
    ///
    /// # Actions
    /// - `Reserve`: available -> unavailable and on a ride, fails if already unavailable
    /// - `Release`: -> available, off the ride
    /// - `FinishTrip`: -> available, off the ride, completed rides + 1
    /// - `SetAvailability(b)`: -> b, but never back to available while on a ride
    async fn handle_action(
        &mut self,
        action: DriverAction,
        _ctx: &(),
    ) -> Result<Driver, DriverError> {
        match action {
            DriverAction::Reserve => {
                if !self.available {
                    return Err(DriverError::Unavailable(self.id));
                }
                self.available = false;
                self.on_ride = true;
            }
            DriverAction::Release => {
                self.available = true;
                self.on_ride = false;
            }
            DriverAction::FinishTrip => {
                self.available = true;
                self.on_ride = false;
                self.rides_completed = self.rides_completed.saturating_add(1);
            }
            DriverAction::SetAvailability(true) if self.on_ride => {
                return Err(DriverError::Unavailable(self.id));
            }
            DriverAction::SetAvailability(available) => {
                self.available = available;
            }
        }
        debug!(
            driver_id = %self.id,
            available = self.available,
            on_ride = self.on_ride,
            rides = self.rides_completed,
            "Driver state"
        );
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::from_create_params(
            DriverId(1),
            DriverCreate {
                name: "Ravi".into(),
                location: "Hebbal".into(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn reserve_is_compare_and_set() {
        let mut d = driver();
        let after = d.handle_action(DriverAction::Reserve, &()).await.unwrap();
        assert!(!after.available);

        let err = d.handle_action(DriverAction::Reserve, &()).await.unwrap_err();
        assert_eq!(err, DriverError::Unavailable(DriverId(1)));
        assert!(!d.available);
    }

    #[tokio::test]
    async fn finish_trip_frees_and_counts() {
        let mut d = driver();
        d.handle_action(DriverAction::Reserve, &()).await.unwrap();
        let after = d.handle_action(DriverAction::FinishTrip, &()).await.unwrap();
        assert!(after.available);
        assert_eq!(after.rides_completed, 1);
    }

    #[tokio::test]
    async fn override_cannot_free_a_driver_on_a_ride() {
        let mut d = driver();
        d.handle_action(DriverAction::Reserve, &()).await.unwrap();

        let err = d
            .handle_action(DriverAction::SetAvailability(true), &())
            .await
            .unwrap_err();
        assert_eq!(err, DriverError::Unavailable(DriverId(1)));
        assert!(!d.available);
        assert!(d.on_ride);

        // Going off duty is still allowed, and the trip ending frees the driver
        d.handle_action(DriverAction::SetAvailability(false), &())
            .await
            .unwrap();
        let after = d.handle_action(DriverAction::FinishTrip, &()).await.unwrap();
        assert!(after.available);
        assert!(!after.on_ride);
    }

    #[tokio::test]
    async fn override_toggles_an_idle_driver() {
        let mut d = driver();
        let off = d
            .handle_action(DriverAction::SetAvailability(false), &())
            .await
            .unwrap();
        assert!(!off.available);
        assert!(!off.on_ride);
        let on = d
            .handle_action(DriverAction::SetAvailability(true), &())
            .await
            .unwrap();
        assert!(on.available);
    }

    #[tokio::test]
    async fn release_does_not_count() {
        let mut d = driver();
        d.handle_action(DriverAction::Reserve, &()).await.unwrap();
        let after = d.handle_action(DriverAction::Release, &()).await.unwrap();
        assert!(after.available);
        assert_eq!(after.rides_completed, 0);
    }

    #[test]
    fn blank_location_is_rejected() {
        let err = Driver::from_create_params(
            DriverId(1),
            DriverCreate {
                name: "Ravi".into(),
                location: "".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, DriverError::ValidationError(_)));
    }
}
