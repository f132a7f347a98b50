//! Driver selection.
//!
//! A [`RideMatchingStrategy`] receives the rider and the whole driver pool, busy drivers
//! included, and must pick one available driver or explain why it could not. Strategies
//! never mutate the pool; reserving the chosen driver is up to the ride actor.

use crate::model::{Driver, Rider};
use std::fmt::Debug;
use xxhash_rust::xxh32::xxh32;

/// Returned when no available driver can be selected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no driver available: {reason}")]
pub struct NoDriverAvailable {
    pub reason: String,
}

impl NoDriverAvailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Trait for algorithms that pick a driver for a rider.
pub trait RideMatchingStrategy: Send + Sync + Debug {
    /// Short name used in logs and the console banner.
    fn name(&self) -> &'static str;

    /// Selects one available driver.
    ///
    /// Deterministic for a given rider and pool. Ties go to the driver that comes first
    /// in `drivers`.
    fn find_driver<'a>(
        &self,
        rider: &Rider,
        drivers: &'a [Driver],
    ) -> Result<&'a Driver, NoDriverAvailable>;
}

/// Placeholder distance between two location labels, in `0..100`.
///
/// Not geographic: labels are hashed and the hashes compared. Stable across runs and
/// platforms.
pub fn location_distance(a: &str, b: &str) -> u32 {
    let ha = i64::from(xxh32(a.as_bytes(), 0));
    let hb = i64::from(xxh32(b.as_bytes(), 0));
    ((ha - hb).unsigned_abs() % 100) as u32
}

/// First available driver with the lowest cost. Strict `<` keeps the earliest on ties.
fn first_min_by<'a, K: Ord>(
    drivers: &'a [Driver],
    cost: impl Fn(&Driver) -> K,
) -> Option<&'a Driver> {
    let mut best: Option<(&Driver, K)> = None;
    for driver in drivers.iter().filter(|d| d.available) {
        let score = cost(driver);
        let better = match &best {
            Some((_, best_score)) => score < *best_score,
            None => true,
        };
        if better {
            best = Some((driver, score));
        }
    }
    best.map(|(driver, _)| driver)
}

/// Picks the available driver whose location is closest to the rider's.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDriver;

impl RideMatchingStrategy for NearestDriver {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn find_driver<'a>(
        &self,
        rider: &Rider,
        drivers: &'a [Driver],
    ) -> Result<&'a Driver, NoDriverAvailable> {
        first_min_by(drivers, |d| location_distance(&rider.location, &d.location))
            .ok_or_else(|| {
                NoDriverAvailable::new(format!("no available driver near {}", rider.location))
            })
    }
}

/// Picks the available driver with the fewest completed rides.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastActiveDriver;

impl RideMatchingStrategy for LeastActiveDriver {
    fn name(&self) -> &'static str {
        "least-active"
    }

    fn find_driver<'a>(
        &self,
        _rider: &Rider,
        drivers: &'a [Driver],
    ) -> Result<&'a Driver, NoDriverAvailable> {
        first_min_by(drivers, |d| d.rides_completed)
            .ok_or_else(|| NoDriverAvailable::new("all drivers are busy"))
    }
}
