//! # Strategies
//!
//! The two extension points of the ride actor:
//!
//! - [`matching`] - [`RideMatchingStrategy`] picks a driver for a new ride
//! - [`fare`] - [`FareStrategy`] prices a completed ride
//!
//! The ride actor only sees `Arc<dyn ...>` trait objects. [`MatchingKind`] and
//! [`FareKind`] are the names used by configuration and the command line to pick an
//! implementation.

pub mod fare;
pub mod matching;

pub use fare::*;
pub use matching::*;

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Selects a [`RideMatchingStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchingKind {
    #[default]
    Nearest,
    LeastActive,
}

impl MatchingKind {
    pub fn build(self) -> Arc<dyn RideMatchingStrategy> {
        match self {
            MatchingKind::Nearest => Arc::new(NearestDriver),
            MatchingKind::LeastActive => Arc::new(LeastActiveDriver),
        }
    }
}

/// Selects a [`FareStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FareKind {
    #[default]
    Default,
    PeakHour,
}

impl FareKind {
    pub fn build(self) -> Arc<dyn FareStrategy> {
        match self {
            FareKind::Default => Arc::new(DefaultFare::default()),
            FareKind::PeakHour => Arc::new(PeakHourFare::default()),
        }
    }
}

/// Error for a strategy name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} strategy {input:?} (expected one of: {expected})")]
pub struct UnknownStrategy {
    pub kind: &'static str,
    pub input: String,
    pub expected: &'static str,
}

impl FromStr for MatchingKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|_| UnknownStrategy {
            kind: "matching",
            input: s.to_string(),
            expected: "nearest, least-active",
        })
    }
}

impl FromStr for FareKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|_| UnknownStrategy {
            kind: "fare",
            input: s.to_string(),
            expected: "default, peak-hour",
        })
    }
}

impl fmt::Display for MatchingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.build().name())
    }
}

impl fmt::Display for FareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.build().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_kebab_case() {
        assert_eq!("least-active".parse::<MatchingKind>().unwrap(), MatchingKind::LeastActive);
        assert_eq!("Nearest".parse::<MatchingKind>().unwrap(), MatchingKind::Nearest);
        assert_eq!("peak-hour".parse::<FareKind>().unwrap(), FareKind::PeakHour);
        let err = "surge".parse::<FareKind>().unwrap_err();
        assert_eq!(err.kind, "fare");
    }

    #[test]
    fn kinds_build_matching_strategies() {
        assert_eq!(MatchingKind::LeastActive.build().name(), "least-active");
        assert_eq!(FareKind::PeakHour.to_string(), "peak-hour");
        assert_eq!(MatchingKind::default().to_string(), "nearest");
    }
}
