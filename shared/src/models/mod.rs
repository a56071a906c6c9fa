//! Domain models for the Weather Stylist service

pub mod credits;
pub mod session;
pub mod weather;

pub use credits::{CreditAccount, CREDIT_CAP};
pub use session::{AuthIdentity, Session};
pub use weather::WeatherReading;
