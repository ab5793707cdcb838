//! # Transport Layer
//!
//! Concrete chat platforms behind the `Delivery` seam.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod discord;

pub use discord::{channel_for, DiscordDelivery};
