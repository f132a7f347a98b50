//! Generic actor framework for the ride directories and the ride ledger.
//!
//! This module provides the building blocks that every store in the system is made of:
//! one Tokio task owns one collection of entities and processes requests against it
//! sequentially.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that Rider, Driver and Ride implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a collection of entities
//! - [`ResourceClient`] - Cloneable handle used to send requests to an actor
//! - [`FrameworkError`] - Transport errors (closed channels, unknown ids, entity failures)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients and dependent actors without
//! spawning the real directories.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
