//! Runtime configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present. Command-line flags
//! are applied on top by the binary.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `RIDE_MATCHING` | `nearest`, `least-active` | `nearest` |
//! | `RIDE_FARE` | `default`, `peak-hour` | `default` |
//! | `RIDE_ACTOR_BUFFER` | positive integer | `32` |

use crate::strategy::{FareKind, MatchingKind};
use std::env;
use std::str::FromStr;

pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Which strategies the ride actor runs with, and how deep the actor queues are.
#[derive(Debug, Clone, PartialEq)]
pub struct RideConfig {
    pub matching: MatchingKind,
    pub fare: FareKind,
    /// Request queue capacity of each actor.
    pub buffer_size: usize,
}

impl Default for RideConfig {
    fn default() -> Self {
        Self {
            matching: MatchingKind::default(),
            fare: FareKind::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl RideConfig {
    /// Load configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let buffer_size = parse_var(&lookup, "RIDE_ACTOR_BUFFER", defaults.buffer_size)?;
        if buffer_size == 0 {
            return Err(ConfigError::Invalid {
                key: "RIDE_ACTOR_BUFFER",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            matching: parse_var(&lookup, "RIDE_MATCHING", defaults.matching)?,
            fare: parse_var(&lookup, "RIDE_FARE", defaults.fare)?,
            buffer_size,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
