//! Fare calculation.

use crate::model::{Ride, VehicleType};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Surcharge applied by [`PeakHourFare`].
pub const PEAK_MULTIPLIER: f64 = 1.5;

/// Category used when a rate card has no entry for the requested vehicle.
pub const FALLBACK_VEHICLE: VehicleType = VehicleType::Auto;

/// Base fare plus a per-kilometre charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub base: f64,
    pub per_km: f64,
}

impl Rate {
    pub const fn new(base: f64, per_km: f64) -> Self {
        Self { base, per_km }
    }

    /// `base + distance_km * per_km`, clamped at zero.
    pub fn price(&self, distance_km: f64) -> f64 {
        (self.base + distance_km * self.per_km).max(0.0)
    }
}

/// Per-vehicle rates used by the fare strategies.
///
/// Lookups for a category the card does not list use the three-wheeler rate. The
/// standard card lists every category; a custom card built with [`RateCard::empty`] and
/// [`RateCard::with_rate`] may not.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    rates: BTreeMap<VehicleType, Rate>,
}

const STANDARD_AUTO: Rate = Rate::new(50.0, 12.0);

impl RateCard {
    /// Bike 30 + 8/km, Auto 50 + 12/km, Car 80 + 15/km.
    pub fn standard() -> Self {
        Self::empty()
            .with_rate(VehicleType::Bike, Rate::new(30.0, 8.0))
            .with_rate(VehicleType::Auto, STANDARD_AUTO)
            .with_rate(VehicleType::Car, Rate::new(80.0, 15.0))
    }

    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    pub fn with_rate(mut self, vehicle: VehicleType, rate: Rate) -> Self {
        self.rates.insert(vehicle, rate);
        self
    }

    /// Rate for `vehicle`, falling back to the card's three-wheeler rate, then to the
    /// standard three-wheeler rate.
    pub fn rate_for(&self, vehicle: VehicleType) -> Rate {
        self.rates
            .get(&vehicle)
            .or_else(|| self.rates.get(&FALLBACK_VEHICLE))
            .copied()
            .unwrap_or(STANDARD_AUTO)
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::standard()
    }
}

/// Trait for pricing a ride.
///
/// Reads only the ride's vehicle and distance. The result is never negative.
pub trait FareStrategy: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn calculate_fare(&self, ride: &Ride) -> f64;
}

/// Plain rate-card pricing.
#[derive(Debug, Clone, Default)]
pub struct DefaultFare {
    rates: RateCard,
}

impl DefaultFare {
    pub fn new(rates: RateCard) -> Self {
        Self { rates }
    }
}

impl FareStrategy for DefaultFare {
    fn name(&self) -> &'static str {
        "default"
    }

    fn calculate_fare(&self, ride: &Ride) -> f64 {
        self.rates.rate_for(ride.vehicle).price(ride.distance_km)
    }
}

/// Rate-card pricing with a peak surcharge.
#[derive(Debug, Clone)]
pub struct PeakHourFare {
    rates: RateCard,
    multiplier: f64,
}

impl PeakHourFare {
    pub fn new(rates: RateCard) -> Self {
        Self {
            rates,
            multiplier: PEAK_MULTIPLIER,
        }
    }
}

impl Default for PeakHourFare {
    fn default() -> Self {
        Self::new(RateCard::standard())
    }
}

impl FareStrategy for PeakHourFare {
    fn name(&self) -> &'static str {
        "peak-hour"
    }

    fn calculate_fare(&self, ride: &Ride) -> f64 {
        self.rates.rate_for(ride.vehicle).price(ride.distance_km) * self.multiplier
    }
}
