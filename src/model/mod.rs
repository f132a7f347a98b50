//! Plain data types managed by the actors: riders, drivers, rides and their receipts.
//!
//! Rides refer to riders and drivers by id only. The driver actor is the single owner of
//! driver state; the ride actor asks it to change availability instead of holding a
//! reference to the driver.

/// Error returned when a typed id cannot be parsed from console input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {input:?}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
}

/// Declares a `u32` newtype id that displays as `<prefix>_<n>` and parses from either
/// `<prefix>_<n>` or a bare `<n>`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let digits = trimmed
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(trimmed);
                digits
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| $crate::model::ParseIdError {
                        kind: $prefix,
                        input: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use entity_id;

pub mod driver;
pub mod receipt;
pub mod ride;
pub mod rider;
pub mod vehicle;

pub use driver::*;
pub use receipt::*;
pub use ride::*;
pub use rider::*;
pub use vehicle::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(RideId(7).to_string(), "ride_7");
        assert_eq!(RiderId(1).to_string(), "rider_1");
        assert_eq!(DriverId(12).to_string(), "driver_12");
    }

    #[test]
    fn ids_parse_prefixed_or_bare() {
        assert_eq!("ride_7".parse::<RideId>().unwrap(), RideId(7));
        assert_eq!(" 3 ".parse::<RiderId>().unwrap(), RiderId(3));
        let err = "driver_x".parse::<DriverId>().unwrap_err();
        assert_eq!(err.kind, "driver");
        // A ride id is not a rider id.
        assert!("ride_2".parse::<RiderId>().is_err());
    }
}
