use serde::{Deserialize, Serialize};
use std::fmt;

super::entity_id!(
    /// Type-safe identifier for Drivers.
    DriverId,
    "driver"
);

/// A driver and their dispatch state.
///
/// # Actor Framework
/// Managed by the driver directory. Availability and the completed-ride counter only
/// change through [`DriverAction`](crate::driver_actor::DriverAction)s, which the ride
/// actor issues as rides are assigned, completed and cancelled.
///
/// `on_ride` is set between a successful reserve and the matching release or finish.
/// While it is set the driver stays unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub location: String,
    pub available: bool,
    pub rides_completed: u32,
    #[serde(default)]
    pub on_ride: bool,
}

/// Payload for registering a driver. New drivers start available with no rides.
#[derive(Debug, Clone)]
pub struct DriverCreate {
    pub name: String,
    pub location: String,
}

/// Payload for updating a driver's location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverUpdate {
    pub location: Option<String>,
}

impl Driver {
    pub fn new(id: DriverId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            available: true,
            rides_completed: 0,
            on_ride: false,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} ({}, {} rides)",
            self.id,
            self.name,
            self.location,
            if self.available { "available" } else { "busy" },
            self.rides_completed
        )
    }
}
