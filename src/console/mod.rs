//! # Console
//!
//! The interactive, line-oriented menu that drives a [`RideSystem`].
//!
//! ```text
//! 1. Add rider
//! 2. Add driver
//! 3. View available drivers
//! 4. Request ride
//! 5. Complete ride
//! 6. Cancel ride
//! 7. View rides
//! 8. Exit
//! ```
//!
//! Input is validated in [`input`] before any actor is called. A rejected entry prints
//! the reason and returns to the menu. Errors reported by the actors are printed the
//! same way; only I/O failures end the session. End of input exits like `8` does.
//!
//! The console is generic over its reader and writer, so tests drive it with byte
//! slices and capture the output in a `Vec<u8>`.

pub mod input;

pub use input::*;

use crate::lifecycle::RideSystem;
use crate::model::{RideId, RiderId, VehicleType};
use std::fmt::Display;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// A menu session over an async reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user picks Exit or input ends.
    pub async fn run(&mut self, system: &RideSystem) -> std::io::Result<()> {
        info!("Console session started");
        loop {
            self.print_menu().await?;
            let Some(line) = self.read_line().await? else {
                break;
            };
            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    self.say(format!("Error: {e}")).await?;
                    continue;
                }
            };
            debug!(?choice, "Menu choice");

            let keep_going = match choice {
                MenuChoice::AddRider => self.add_rider(system).await?,
                MenuChoice::AddDriver => self.add_driver(system).await?,
                MenuChoice::ViewAvailableDrivers => self.view_available(system).await?,
                MenuChoice::RequestRide => self.request_ride(system).await?,
                MenuChoice::CompleteRide => self.complete_ride(system).await?,
                MenuChoice::CancelRide => self.cancel_ride(system).await?,
                MenuChoice::ViewRides => self.view_rides(system).await?,
                MenuChoice::Exit => false,
            };
            if !keep_going {
                break;
            }
        }
        self.say("Goodbye.").await?;
        info!("Console session ended");
        Ok(())
    }

    async fn print_menu(&mut self) -> std::io::Result<()> {
        let mut menu = String::from("\n=== Ride Booking ===\n");
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", i + 1, choice.label()));
        }
        menu.push_str("Choose an option: ");
        self.output.write_all(menu.as_bytes()).await?;
        self.output.flush().await
    }

    async fn say(&mut self, text: impl Display) -> std::io::Result<()> {
        self.output.write_all(format!("{text}\n").as_bytes()).await?;
        self.output.flush().await
    }

    /// `None` at end of input. Bytes that are not UTF-8 are replaced, so the line is
    /// rejected by the parsers instead of ending the session.
    async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf).await?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }

    async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        self.output.write_all(format!("{label}: ").as_bytes()).await?;
        self.output.flush().await?;
        self.read_line().await
    }

    /// Prompts until the parser accepts, printing each rejection. `None` at end of input.
    ///
    /// Only used for free-text fields; menu-style choices go back to the menu instead.
    async fn prompt_text(&mut self, field: &'static str) -> std::io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(&format!("Enter {field}")).await? else {
                return Ok(None);
            };
            match parse_text(field, &line) {
                Ok(text) => return Ok(Some(text)),
                Err(e) => self.say(format!("Error: {e}")).await?,
            }
        }
    }

    async fn add_rider(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        let Some(name) = self.prompt_text("rider name").await? else {
            return Ok(false);
        };
        let Some(location) = self.prompt_text("rider location").await? else {
            return Ok(false);
        };
        match system.rider_client.register_rider(&name, &location).await {
            Ok(rider) => self.say(format!("Rider registered: {rider}")).await?,
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }

    async fn add_driver(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        let Some(name) = self.prompt_text("driver name").await? else {
            return Ok(false);
        };
        let Some(location) = self.prompt_text("driver location").await? else {
            return Ok(false);
        };
        match system.driver_client.register_driver(&name, &location).await {
            Ok(driver) => self.say(format!("Driver registered: {driver}")).await?,
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }

    async fn view_available(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        match system.driver_client.list_available_drivers().await {
            Ok(list) if list.is_empty() => self.say("No drivers available.").await?,
            Ok(list) => {
                for driver in list {
                    self.say(driver).await?;
                }
            }
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }

    async fn request_ride(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        let Some(line) = self.prompt("Enter rider id").await? else {
            return Ok(false);
        };
        let rider_id = match parse_id::<RiderId>(&line) {
            Ok(id) => id,
            Err(e) => {
                self.say(format!("Error: {e}")).await?;
                return Ok(true);
            }
        };

        let Some(line) = self.prompt("Enter distance (km)").await? else {
            return Ok(false);
        };
        let distance_km = match parse_distance(&line) {
            Ok(km) => km,
            Err(e) => {
                self.say(format!("Error: {e}")).await?;
                return Ok(true);
            }
        };

        let mut vehicles = String::from("Vehicle type:");
        for (i, vehicle) in VehicleType::ALL.iter().enumerate() {
            vehicles.push_str(&format!(" {}. {}", i + 1, vehicle));
        }
        self.say(vehicles).await?;
        let Some(line) = self.prompt("Choose vehicle").await? else {
            return Ok(false);
        };
        let vehicle = match parse_vehicle_choice(&line) {
            Ok(vehicle) => vehicle,
            Err(e) => {
                self.say(format!("Error: {e}")).await?;
                return Ok(true);
            }
        };

        match system
            .ride_client
            .request_ride(rider_id, distance_km, vehicle)
            .await
        {
            Ok(ride) => self.say(format!("Ride booked: {ride}")).await?,
            Err(e) => self.say(format!("Could not book ride: {e}")).await?,
        }
        Ok(true)
    }

    async fn read_ride_id(&mut self) -> std::io::Result<Option<Result<RideId, InputError>>> {
        Ok(self
            .prompt("Enter ride id")
            .await?
            .map(|line| parse_id::<RideId>(&line)))
    }

    async fn complete_ride(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        let ride_id = match self.read_ride_id().await? {
            None => return Ok(false),
            Some(Err(e)) => {
                self.say(format!("Error: {e}")).await?;
                return Ok(true);
            }
            Some(Ok(id)) => id,
        };
        match system.ride_client.complete_ride(ride_id).await {
            Ok(Some(receipt)) => {
                self.say(format!("Ride {ride_id} completed. Fare: {:.2}", receipt.amount()))
                    .await?;
                self.say(receipt).await?;
            }
            Ok(None) => {
                self.say(format!(
                    "Ride {ride_id} was not completed (unknown ride or not assigned)."
                ))
                .await?
            }
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }

    async fn cancel_ride(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        let ride_id = match self.read_ride_id().await? {
            None => return Ok(false),
            Some(Err(e)) => {
                self.say(format!("Error: {e}")).await?;
                return Ok(true);
            }
            Some(Ok(id)) => id,
        };
        match system.ride_client.cancel_ride(ride_id).await {
            Ok(true) => self.say(format!("Ride {ride_id} cancelled.")).await?,
            Ok(false) => {
                self.say(format!(
                    "Ride {ride_id} was not cancelled (unknown ride, completed or already cancelled)."
                ))
                .await?
            }
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }

    async fn view_rides(&mut self, system: &RideSystem) -> std::io::Result<bool> {
        match system.ride_client.list_rides().await {
            Ok(rides) if rides.is_empty() => self.say("No rides yet.").await?,
            Ok(rides) => {
                for ride in rides {
                    self.say(ride).await?;
                }
            }
            Err(e) => self.say(format!("Error: {e}")).await?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::RideConfig;

    async fn session(script: &str) -> (String, RideSystem) {
        let system = RideSystem::new(&RideConfig::default());
        let mut console = Console::new(script.as_bytes(), Vec::new());
        console.run(&system).await.unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, system)
    }

    #[tokio::test]
    async fn book_and_complete_through_menu() {
        let script = "1\nAsha\nKoramangala\n\
                      2\nRavi\nHebbal\n\
                      4\nrider_1\n10\n3\n\
                      5\n1\n\
                      7\n8\n";
        let (output, system) = session(script).await;

        assert!(output.contains("Rider registered: rider_1 Asha @ Koramangala"));
        assert!(output.contains("Driver registered: driver_1 Ravi @ Hebbal"));
        assert!(output.contains("Ride booked: ride_1 | rider rider_1 | driver driver_1"));
        assert!(output.contains("Ride ride_1 completed. Fare: 230.00"));
        assert!(output.contains("COMPLETED | fare 230.00"));
        assert!(output.ends_with("Goodbye.\n"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_vehicle_choice_books_nothing() {
        let script = "1\nAsha\nKoramangala\n2\nRavi\nHebbal\n4\n1\n5\n9\n7\n8\n";
        let (output, system) = session(script).await;

        assert!(output.contains("invalid vehicle choice \"9\""));
        assert!(output.contains("No rides yet."));
        let drivers = system.driver_client.list_available_drivers().await.unwrap();
        assert_eq!(drivers.len(), 1);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn blank_name_is_asked_again() {
        let (output, system) = session("1\n   \nAsha\nHebbal\n8\n").await;
        assert!(output.contains("Error: rider name must not be empty"));
        assert!(output.contains("Rider registered: rider_1 Asha @ Hebbal"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn no_driver_is_reported() {
        let (output, system) = session("1\nAsha\nHebbal\n4\n1\n2\n1\n3\n8\n").await;
        assert!(output.contains("Could not book ride: no driver available"));
        assert!(output.contains("No drivers available."));
        assert!(system.ride_client.list_rides().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn end_of_input_exits_cleanly() {
        let (output, system) = session("1\nAsha").await;
        // "Asha" without a newline is still a line; the location prompt then hits EOF.
        assert!(output.ends_with("Goodbye.\n"));
        assert!(system.rider_client.list_riders().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_ride_is_a_no_op() {
        let (output, system) = session("5\nride_4\n6\n4\nx\n8\n").await;
        assert!(output.contains("Ride ride_4 was not completed"));
        assert!(output.contains("Ride ride_4 was not cancelled"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_utf8_is_rejected_and_menu_continues() {
        let system = RideSystem::new(&RideConfig::default());
        let script: &[u8] = b"\xff\xfe\n1\nAsha\nHeb\xc3bal\n7\n8\n";
        let mut console = Console::new(script, Vec::new());
        console.run(&system).await.unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert!(output.contains("Error: invalid menu choice"));
        assert!(output.contains("Rider registered: rider_1 Asha @ Heb"));
        assert!(output.contains("No rides yet."));
        assert!(output.ends_with("Goodbye.\n"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn vehicle_can_be_chosen_by_name() {
        let script = "1\nAsha\nHebbal\n2\nRavi\nHebbal\n4\n1\n2\nbike\n8\n";
        let (output, system) = session(script).await;
        assert!(output.contains("2 km | BIKE | ASSIGNED"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn bad_menu_choice_shows_error() {
        let (output, system) = session("42\n8\n").await;
        assert!(output.contains("invalid menu choice \"42\""));
        system.shutdown().await.unwrap();
    }
}
