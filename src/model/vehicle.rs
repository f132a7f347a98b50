use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle category requested for a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleType {
    /// Two-wheeler.
    Bike,
    /// Three-wheeler.
    Auto,
    /// Four-wheeler.
    Car,
}

impl VehicleType {
    /// Every category, in console menu order.
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Auto, VehicleType::Car];

    /// Maps a 1-based console menu choice to a category.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Bike => "BIKE",
            VehicleType::Auto => "AUTO",
            VehicleType::Car => "CAR",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type: {0:?}")]
pub struct ParseVehicleError(pub String);

impl FromStr for VehicleType {
    type Err = ParseVehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" | "two-wheeler" => Ok(VehicleType::Bike),
            "auto" | "three-wheeler" => Ok(VehicleType::Auto),
            "car" | "four-wheeler" => Ok(VehicleType::Car),
            _ => Err(ParseVehicleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_are_one_based() {
        assert_eq!(VehicleType::from_menu_choice(1), Some(VehicleType::Bike));
        assert_eq!(VehicleType::from_menu_choice(3), Some(VehicleType::Car));
        assert_eq!(VehicleType::from_menu_choice(0), None);
        assert_eq!(VehicleType::from_menu_choice(4), None);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("CAR".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("three-wheeler".parse::<VehicleType>().unwrap(), VehicleType::Auto);
        assert!("truck".parse::<VehicleType>().is_err());
    }
}
