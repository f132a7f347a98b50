use super::{DriverId, FareReceipt, RiderId, VehicleType};
use serde::{Deserialize, Serialize};
use std::fmt;

super::entity_id!(
    /// Type-safe identifier for Rides.
    RideId,
    "ride"
);

/// Where a ride is in its lifecycle.
///
/// `Requested -> Assigned -> Completed`, and `Requested | Assigned -> Cancelled`.
/// `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RideStatus {
    Requested,
    Assigned,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn can_complete(self) -> bool {
        self == RideStatus::Assigned
    }

    pub fn can_cancel(self) -> bool {
        matches!(self, RideStatus::Requested | RideStatus::Assigned)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RideStatus::Requested => "REQUESTED",
            RideStatus::Assigned => "ASSIGNED",
            RideStatus::Completed => "COMPLETED",
            RideStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// A booked ride.
///
/// # Actor Framework
/// Managed by the ride actor. Matching happens in
/// [`on_create`](crate::framework::ActorEntity::on_create), so a ride is only ever stored
/// once it has a driver. Completion and cancellation are
/// [`RideAction`](crate::ride_actor::RideAction)s.
///
/// The state-changing methods below only touch the ride itself. Keeping the driver
/// directory in step is the ride actor's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    pub rider_id: RiderId,
    pub driver_id: Option<DriverId>,
    pub distance_km: f64,
    pub vehicle: VehicleType,
    pub status: RideStatus,
    pub receipt: Option<FareReceipt>,
}

/// Payload for requesting a ride.
#[derive(Debug, Clone)]
pub struct RideCreate {
    pub rider_id: RiderId,
    pub distance_km: f64,
    pub vehicle: VehicleType,
}

impl Ride {
    /// Creates a ride in `Requested` with no driver and no receipt.
    pub fn new(id: RideId, rider_id: RiderId, distance_km: f64, vehicle: VehicleType) -> Self {
        Self {
            id,
            rider_id,
            driver_id: None,
            distance_km,
            vehicle,
            status: RideStatus::Requested,
            receipt: None,
        }
    }

    /// Records the matched driver. Only valid once, from `Requested`.
    pub(crate) fn assign(&mut self, driver_id: DriverId) {
        debug_assert_eq!(self.status, RideStatus::Requested);
        debug_assert!(self.driver_id.is_none());
        self.driver_id = Some(driver_id);
        self.status = RideStatus::Assigned;
    }

    /// Attaches the receipt and moves to `Completed`.
    pub(crate) fn complete(&mut self, receipt: FareReceipt) {
        debug_assert!(self.status.can_complete());
        self.receipt = Some(receipt);
        self.status = RideStatus::Completed;
    }

    /// Moves to `Cancelled`. The driver, if any, stays recorded on the ride.
    pub(crate) fn cancel(&mut self) {
        debug_assert!(self.status.can_cancel());
        self.status = RideStatus::Cancelled;
    }

    pub fn fare(&self) -> Option<f64> {
        self.receipt.as_ref().map(FareReceipt::amount)
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | rider {} | driver {} | {} km | {} | {}",
            self.id,
            self.rider_id,
            self.driver_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.distance_km,
            self.vehicle,
            self.status
        )?;
        if let Some(fare) = self.fare() {
            write!(f, " | fare {fare:.2}")?;
        }
        Ok(())
    }
}
