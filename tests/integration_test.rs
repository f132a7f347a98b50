use ride_dispatch::clients::ActorClient;
use ride_dispatch::driver_actor::DriverError;
use ride_dispatch::rider_actor::RiderError;
use ride_dispatch::lifecycle::{RideConfig, RideSystem};
use ride_dispatch::model::{RideStatus, RiderId, VehicleType};
use ride_dispatch::ride_actor::RideError;
use ride_dispatch::strategy::{FareKind, MatchingKind};
use std::collections::HashSet;

fn config(matching: MatchingKind, fare: FareKind) -> RideConfig {
    RideConfig {
        matching,
        fare,
        ..RideConfig::default()
    }
}

/// Full end-to-end integration test with all real actors.
#[tokio::test]
async fn test_full_ride_lifecycle() {
    let system = RideSystem::new(&RideConfig::default());

    let rider = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .expect("Failed to register rider");
    let driver = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .expect("Failed to register driver");
    assert!(driver.available);

    // Request a ride: matched, assigned, driver reserved
    let ride = system
        .ride_client
        .request_ride(rider.id, 10.0, VehicleType::Car)
        .await
        .expect("Failed to request ride");
    assert_eq!(ride.status, RideStatus::Assigned);
    assert_eq!(ride.driver_id, Some(driver.id));
    assert!(ride.receipt.is_none());

    let busy = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert!(!busy.available, "Driver should be reserved by the ride");

    // Complete: receipt issued, driver free again, counter bumped
    let receipt = system
        .ride_client
        .complete_ride(ride.id)
        .await
        .expect("Failed to complete ride")
        .expect("Assigned ride should complete");
    assert_eq!(receipt.amount(), 230.0);
    assert_eq!(receipt.ride_id(), ride.id);

    let freed = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert!(freed.available);
    assert_eq!(freed.rides_completed, 1);

    let stored = system.ride_client.get(ride.id).await.unwrap().unwrap();
    assert_eq!(stored.status, RideStatus::Completed);
    assert_eq!(stored.receipt, Some(receipt));

    // Completing twice is a no-op
    assert_eq!(system.ride_client.complete_ride(ride.id).await.unwrap(), None);
    let again = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert_eq!(again.rides_completed, 1);

    // Cancelling a completed ride is a no-op too
    assert!(!system.ride_client.cancel_ride(ride.id).await.unwrap());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_no_driver_available_changes_nothing() {
    let system = RideSystem::new(&RideConfig::default());
    let rider = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .unwrap();

    // Empty pool
    let err = system
        .ride_client
        .request_ride(rider.id, 4.0, VehicleType::Bike)
        .await
        .unwrap_err();
    assert!(matches!(err, RideError::NoDriverAvailable(_)), "got {err:?}");

    // Pool with only an off-duty driver
    let driver = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();
    system
        .driver_client
        .set_availability(driver.id, false)
        .await
        .unwrap();
    let drivers_before = system.driver_client.list_drivers().await.unwrap();

    let err = system
        .ride_client
        .request_ride(rider.id, 4.0, VehicleType::Bike)
        .await
        .unwrap_err();
    assert!(matches!(err, RideError::NoDriverAvailable(_)));

    assert!(system.ride_client.list_rides().await.unwrap().is_empty());
    assert_eq!(system.driver_client.list_drivers().await.unwrap(), drivers_before);
    assert_eq!(system.rider_client.list_riders().await.unwrap(), vec![rider]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_request_validation() {
    let system = RideSystem::new(&RideConfig::default());
    system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();

    let err = system
        .ride_client
        .request_ride(RiderId(42), 3.0, VehicleType::Auto)
        .await
        .unwrap_err();
    assert_eq!(err, RideError::RiderNotFound(RiderId(42)));

    let rider = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .unwrap();
    let err = system
        .ride_client
        .request_ride(rider.id, -1.0, VehicleType::Auto)
        .await
        .unwrap_err();
    assert_eq!(err, RideError::InvalidDistance(-1.0));

    // Neither failure touched the driver
    let available = system.driver_client.list_available_drivers().await.unwrap();
    assert_eq!(available.len(), 1);
    assert!(system.ride_client.list_rides().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_releases_driver() {
    let system = RideSystem::new(&RideConfig::default());
    let rider = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .unwrap();
    let driver = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();

    let ride = system
        .ride_client
        .request_ride(rider.id, 6.0, VehicleType::Auto)
        .await
        .unwrap();
    assert!(system.ride_client.cancel_ride(ride.id).await.unwrap());

    let stored = system.ride_client.get(ride.id).await.unwrap().unwrap();
    assert_eq!(stored.status, RideStatus::Cancelled);
    assert_eq!(stored.driver_id, Some(driver.id));
    assert!(stored.receipt.is_none());

    let freed = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert!(freed.available);
    assert_eq!(freed.rides_completed, 0);

    // A cancelled ride can be neither completed nor cancelled again
    assert_eq!(system.ride_client.complete_ride(ride.id).await.unwrap(), None);
    assert!(!system.ride_client.cancel_ride(ride.id).await.unwrap());
    let after = system.ride_client.get(ride.id).await.unwrap().unwrap();
    assert_eq!(after, stored);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_ride_is_a_no_op() {
    let system = RideSystem::new(&RideConfig::default());
    let ride_id = "ride_7".parse().unwrap();
    assert_eq!(system.ride_client.complete_ride(ride_id).await.unwrap(), None);
    assert!(!system.ride_client.cancel_ride(ride_id).await.unwrap());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_least_active_and_peak_hour() {
    let system = RideSystem::new(&config(MatchingKind::LeastActive, FareKind::PeakHour));
    let rider = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .unwrap();
    let busy = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();
    let quiet = system
        .driver_client
        .register_driver("Meena", "Jayanagar")
        .await
        .unwrap();

    // Give the drivers completed-ride counts of 3 and 1
    for (id, trips) in [(busy.id, 3), (quiet.id, 1)] {
        for _ in 0..trips {
            system.driver_client.reserve(id).await.unwrap();
            system.driver_client.finish_trip(id).await.unwrap();
        }
    }

    let ride = system
        .ride_client
        .request_ride(rider.id, 10.0, VehicleType::Car)
        .await
        .unwrap();
    assert_eq!(ride.driver_id, Some(quiet.id));

    let receipt = system.ride_client.complete_ride(ride.id).await.unwrap().unwrap();
    assert_eq!(receipt.amount(), 345.0);

    system.shutdown().await.unwrap();
}

/// Many riders racing for a few drivers: every driver is booked at most once.
#[tokio::test]
async fn test_concurrent_requests_never_double_book() {
    let system = RideSystem::new(&RideConfig::default());

    for i in 0..3 {
        system
            .driver_client
            .register_driver(&format!("driver {i}"), &format!("zone {i}"))
            .await
            .unwrap();
    }
    let mut riders = Vec::new();
    for i in 0..10 {
        let rider = system
            .rider_client
            .register_rider(&format!("rider {i}"), &format!("block {i}"))
            .await
            .unwrap();
        riders.push(rider.id);
    }

    let mut tasks = Vec::new();
    for rider_id in riders {
        let client = system.ride_client.clone();
        tasks.push(tokio::spawn(async move {
            client.request_ride(rider_id, 2.0, VehicleType::Bike).await
        }));
    }

    let mut booked = HashSet::new();
    let mut refused = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(ride) => {
                assert!(booked.insert(ride.driver_id.unwrap()), "Driver booked twice");
            }
            Err(RideError::NoDriverAvailable(_)) => refused += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
    assert_eq!(booked.len(), 3);
    assert_eq!(refused, 7);
    assert!(system
        .driver_client
        .list_available_drivers()
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

/// The availability override cannot put a driver who is on a ride back on the market.
#[tokio::test]
async fn test_override_cannot_double_book_a_driver() {
    let system = RideSystem::new(&RideConfig::default());
    let first = system
        .rider_client
        .register_rider("Asha", "Koramangala")
        .await
        .unwrap();
    let second = system
        .rider_client
        .register_rider("Kiran", "Koramangala")
        .await
        .unwrap();
    let driver = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();

    let ride = system
        .ride_client
        .request_ride(first.id, 5.0, VehicleType::Auto)
        .await
        .unwrap();

    let err = system
        .driver_client
        .set_availability(driver.id, true)
        .await
        .unwrap_err();
    assert_eq!(err, DriverError::Unavailable(driver.id));
    let held = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert!(!held.available);
    assert!(held.on_ride);

    let err = system
        .ride_client
        .request_ride(second.id, 5.0, VehicleType::Auto)
        .await
        .unwrap_err();
    assert!(matches!(err, RideError::NoDriverAvailable(_)), "got {err:?}");

    // Completing the only ride frees the driver, and no other ride is left assigned
    system.ride_client.complete_ride(ride.id).await.unwrap().unwrap();
    let freed = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert!(freed.available);
    assert!(!freed.on_ride);
    let assigned = system
        .ride_client
        .list_rides()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.status == RideStatus::Assigned)
        .count();
    assert_eq!(assigned, 0);

    // Once free, the override works again
    system
        .driver_client
        .set_availability(driver.id, false)
        .await
        .unwrap();
    let back = system
        .driver_client
        .set_availability(driver.id, true)
        .await
        .unwrap();
    assert!(back.available);

    system.shutdown().await.unwrap();
}

/// Nearest-driver matching sees locations as they are after an update.
#[tokio::test]
async fn test_nearest_match_follows_location_updates() {
    let system = RideSystem::new(&config(MatchingKind::Nearest, FareKind::Default));
    let rider = system
        .rider_client
        .register_rider("Asha", "Whitefield")
        .await
        .unwrap();
    let near = system
        .driver_client
        .register_driver("Meena", "Jayanagar")
        .await
        .unwrap();
    let far = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();

    let ride = system
        .ride_client
        .request_ride(rider.id, 3.0, VehicleType::Bike)
        .await
        .unwrap();
    assert_eq!(ride.driver_id, Some(near.id));
    assert!(system.ride_client.cancel_ride(ride.id).await.unwrap());

    let moved = system
        .driver_client
        .update_location(far.id, "  Whitefield ")
        .await
        .unwrap();
    assert_eq!(moved.location, "Whitefield");

    let ride = system
        .ride_client
        .request_ride(rider.id, 3.0, VehicleType::Bike)
        .await
        .unwrap();
    assert_eq!(ride.driver_id, Some(far.id));
    assert!(system.ride_client.cancel_ride(ride.id).await.unwrap());

    // The rider moves next to the other driver
    let moved = system
        .rider_client
        .update_location(rider.id, "Jayanagar")
        .await
        .unwrap();
    assert_eq!(moved.location, "Jayanagar");
    let ride = system
        .ride_client
        .request_ride(rider.id, 3.0, VehicleType::Bike)
        .await
        .unwrap();
    assert_eq!(ride.driver_id, Some(near.id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blank_location_update_is_rejected() {
    let system = RideSystem::new(&RideConfig::default());
    let rider = system
        .rider_client
        .register_rider("Asha", "Whitefield")
        .await
        .unwrap();
    let driver = system
        .driver_client
        .register_driver("Ravi", "Hebbal")
        .await
        .unwrap();

    let err = system
        .rider_client
        .update_location(rider.id, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, RiderError::ValidationError(_)));
    let err = system
        .driver_client
        .update_location(driver.id, "")
        .await
        .unwrap_err();
    assert!(matches!(err, DriverError::ValidationError(_)));

    let rider = system.rider_client.get(rider.id).await.unwrap().unwrap();
    assert_eq!(rider.location, "Whitefield");
    let driver = system.driver_client.get(driver.id).await.unwrap().unwrap();
    assert_eq!(driver.location, "Hebbal");

    let err = system
        .rider_client
        .update_location(RiderId(99), "Hebbal")
        .await
        .unwrap_err();
    assert_eq!(err, RiderError::NotFound("rider_99".into()));

    system.shutdown().await.unwrap();
}
