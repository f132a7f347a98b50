//! Custom actions for the Driver actor.
//!
//! Availability and the completed-ride counter change only through these actions. The
//! ride actor sends `Reserve`, `Release` and `FinishTrip`; `SetAvailability` is the
//! administrative override.

/// Custom actions for Driver entities.
///
/// Every action answers with the driver as it is after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverAction {
    /// Takes the driver off the market for a ride.
    ///
    /// # Errors
    /// Fails with [`DriverError::Unavailable`](super::DriverError::Unavailable) if the
    /// driver is already unavailable. This compare-and-set is what keeps a driver on at
    /// most one ride.
    Reserve,
    /// Puts the driver back on the market after a cancelled ride.
    Release,
    /// Puts the driver back on the market and counts one more completed ride.
    FinishTrip,
    /// Sets availability directly.
    ///
    /// # Errors
    /// `SetAvailability(true)` fails with
    /// [`DriverError::Unavailable`](super::DriverError::Unavailable) while the driver is
    /// on a ride. Only `Release` or `FinishTrip` puts such a driver back on the market.
    SetAvailability(bool),
}
