//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each domain client hides the request/response enums behind plain async methods and
//! returns its actor's own error type.

pub mod actor_client;
pub mod driver_client;
pub mod ride_client;
pub mod rider_client;

pub use actor_client::ActorClient;
pub use driver_client::*;
pub use ride_client::*;
pub use rider_client::*;
