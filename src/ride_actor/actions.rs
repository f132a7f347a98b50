//! Custom actions for the Ride actor.

use crate::model::{FareReceipt, RideStatus};

/// Lifecycle transitions for a stored ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideAction {
    /// `Assigned -> Completed`: price the ride, issue a receipt, free the driver.
    Complete,
    /// `Requested | Assigned -> Cancelled`: free the driver if one was assigned.
    Cancel,
}

/// Outcome of a [`RideAction`].
///
/// A transition the ride's status does not allow is not an error. It leaves everything
/// as it was and reports the status it found.
#[derive(Debug, Clone, PartialEq)]
pub enum RideActionResult {
    Completed(FareReceipt),
    Cancelled,
    Unchanged(RideStatus),
}
