//! Shared domain types for the Weather Stylist service
//!
//! This crate holds the pure, I/O-free pieces of the system: the normalized
//! weather reading, per-session credit bookkeeping, and the outfit threshold
//! logic. Everything that talks to the network lives in the backend crate.

pub mod models;
pub mod outfit;

pub use models::*;
pub use outfit::*;
