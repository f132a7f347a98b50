//! Parsing and validation of console input lines.

use crate::model::{ParseIdError, VehicleType};
use std::str::FromStr;

/// Input the console rejects before anything reaches an actor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("invalid menu choice {0:?}, expected a number from 1 to 8")]
    MenuChoice(String),
    #[error("invalid vehicle choice {0:?}, expected 1, 2, 3 or a vehicle name")]
    VehicleChoice(String),
    #[error("invalid distance {0:?}, expected a positive number of km")]
    Distance(String),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRider,
    AddDriver,
    ViewAvailableDrivers,
    RequestRide,
    CompleteRide,
    CancelRide,
    ViewRides,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddRider,
        MenuChoice::AddDriver,
        MenuChoice::ViewAvailableDrivers,
        MenuChoice::RequestRide,
        MenuChoice::CompleteRide,
        MenuChoice::CancelRide,
        MenuChoice::ViewRides,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddRider => "Add rider",
            MenuChoice::AddDriver => "Add driver",
            MenuChoice::ViewAvailableDrivers => "View available drivers",
            MenuChoice::RequestRide => "Request ride",
            MenuChoice::CompleteRide => "Complete ride",
            MenuChoice::CancelRide => "Cancel ride",
            MenuChoice::ViewRides => "View rides",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MenuChoice::ALL.get(i).copied())
        .ok_or_else(|| InputError::MenuChoice(line.trim().to_string()))
}

/// Trimmed, non-empty text.
pub fn parse_text(field: &'static str, line: &str) -> Result<String, InputError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::Empty(field));
    }
    Ok(text.to_string())
}

/// Positive, finite kilometres.
pub fn parse_distance(line: &str) -> Result<f64, InputError> {
    match line.trim().parse::<f64>() {
        Ok(km) if km.is_finite() && km > 0.0 => Ok(km),
        _ => Err(InputError::Distance(line.trim().to_string())),
    }
}

/// `1`, `2`, `3`, or a name such as `car` or `two-wheeler`. Anything else is an error,
/// never a default.
pub fn parse_vehicle_choice(line: &str) -> Result<VehicleType, InputError> {
    let line = line.trim();
    match line.parse::<u32>() {
        Ok(n) => VehicleType::from_menu_choice(n),
        Err(_) => line.parse::<VehicleType>().ok(),
    }
    .ok_or_else(|| InputError::VehicleChoice(line.to_string()))
}

/// Prefixed (`ride_3`) or bare (`3`) ids.
pub fn parse_id<I>(line: &str) -> Result<I, InputError>
where
    I: FromStr<Err = ParseIdError>,
{
    Ok(line.parse::<I>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RideId, RiderId};

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_choice(" 4\n").unwrap(), MenuChoice::RequestRide);
        assert_eq!(parse_menu_choice("8").unwrap(), MenuChoice::Exit);
        assert!(parse_menu_choice("0").is_err());
        assert!(parse_menu_choice("9").is_err());
        assert!(parse_menu_choice("rides").is_err());
    }

    #[test]
    fn text_must_not_be_blank() {
        assert_eq!(parse_text("name", "  Asha \n").unwrap(), "Asha");
        assert_eq!(parse_text("name", " \n").unwrap_err(), InputError::Empty("name"));
    }

    #[test]
    fn distance_must_be_positive() {
        assert_eq!(parse_distance("12.5").unwrap(), 12.5);
        for bad in ["0", "-2", "NaN", "inf", "far"] {
            assert!(parse_distance(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn vehicle_choice_has_no_default() {
        assert_eq!(parse_vehicle_choice("1").unwrap(), VehicleType::Bike);
        assert_eq!(parse_vehicle_choice("3").unwrap(), VehicleType::Car);
        assert_eq!(parse_vehicle_choice(" Auto\n").unwrap(), VehicleType::Auto);
        assert_eq!(parse_vehicle_choice("four-wheeler").unwrap(), VehicleType::Car);
        assert!(parse_vehicle_choice("truck").is_err());
        assert_eq!(
            parse_vehicle_choice("7").unwrap_err(),
            InputError::VehicleChoice("7".into())
        );
    }

    #[test]
    fn ids_accept_prefix_or_number() {
        assert_eq!(parse_id::<RideId>("ride_3").unwrap(), RideId(3));
        assert_eq!(parse_id::<RiderId>("3\n").unwrap(), RiderId(3));
        assert!(matches!(parse_id::<RideId>("rider_3"), Err(InputError::Id(_))));
    }
}
