use super::RideId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing record attached to a ride when it completes.
///
/// Only the ride actor constructs receipts, exactly once per completed ride. The fields
/// are private so a receipt cannot be altered after it is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareReceipt {
    ride_id: RideId,
    amount: f64,
    generated_at: DateTime<Utc>,
}

impl FareReceipt {
    /// Issues a receipt stamped with the current time.
    pub fn new(ride_id: RideId, amount: f64) -> Self {
        Self {
            ride_id,
            amount,
            generated_at: Utc::now(),
        }
    }

    pub fn ride_id(&self) -> RideId {
        self.ride_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

impl fmt::Display for FareReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "receipt for {}: {:.2} (issued {})",
            self.ride_id,
            self.amount,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_is_stamped_at_issue_time() {
        let before = Utc::now();
        let receipt = FareReceipt::new(RideId(4), 230.0);
        assert!(receipt.generated_at() >= before);
        assert!(receipt.generated_at() <= Utc::now());
        assert_eq!(receipt.ride_id(), RideId(4));
        assert!(receipt.to_string().starts_with("receipt for ride_4: 230.00"));
    }

    #[test]
    fn receipt_serializes_with_plain_ride_id() {
        let receipt = FareReceipt::new(RideId(2), 345.0);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["ride_id"], 2);
        assert_eq!(json["amount"], 345.0);
        assert!(json["generated_at"].is_string());
    }
}
