//! [`ActorEntity`] implementation for [`Rider`].
//!
//! Riders have no dependencies and no custom actions: the directory only registers
//! them, hands them out, and moves them around.

use super::RiderError;
use crate::framework::ActorEntity;
use crate::model::{Rider, RiderCreate, RiderId, RiderUpdate};
use async_trait::async_trait;

fn required(field: &str, value: &str) -> Result<String, RiderError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RiderError::ValidationError(format!("{field} must not be blank")));
    }
    Ok(value.to_string())
}

#[async_trait]
impl ActorEntity for Rider {
    type Id = RiderId;
    type Create = RiderCreate;
    type Update = RiderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RiderError;

    /// Creates a new Rider. Name and location are trimmed and must not be blank.
    fn from_create_params(id: RiderId, params: RiderCreate) -> Result<Self, RiderError> {
        let name = required("name", &params.name)?;
        let location = required("location", &params.location)?;
        Ok(Rider::new(id, name, location))
    }

    /// Moves the rider. `None` leaves the location as it was.
    async fn on_update(&mut self, update: RiderUpdate, _ctx: &()) -> Result<(), RiderError> {
        if let Some(location) = update.location {
            self.location = required("location", &location)?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), RiderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let params = RiderCreate {
            name: "   ".into(),
            location: "Indiranagar".into(),
        };
        let err = Rider::from_create_params(RiderId(1), params).unwrap_err();
        assert_eq!(err, RiderError::ValidationError("name must not be blank".into()));
    }

    #[test]
    fn fields_are_trimmed() {
        let params = RiderCreate {
            name: " Asha ".into(),
            location: "Indiranagar\n".into(),
        };
        let rider = Rider::from_create_params(RiderId(2), params).unwrap();
        assert_eq!(rider, Rider::new(RiderId(2), "Asha", "Indiranagar"));
    }
}
