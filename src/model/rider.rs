use serde::{Deserialize, Serialize};
use std::fmt;

super::entity_id!(
    /// Type-safe identifier for Riders.
    RiderId,
    "rider"
);

/// Someone who books rides.
///
/// # Actor Framework
/// Managed by the rider directory, a [`ResourceActor`](crate::framework::ResourceActor).
/// See [`impl ActorEntity for Rider`](#impl-ActorEntity-for-Rider) for:
/// - Creation parameters ([`RiderCreate`])
/// - Update parameters ([`RiderUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub location: String,
}

/// Payload for registering a rider.
#[derive(Debug, Clone)]
pub struct RiderCreate {
    pub name: String,
    pub location: String,
}

/// Payload for updating a rider. Only the location can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderUpdate {
    pub location: Option<String>,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.id, self.name, self.location)
    }
}
