//! Normalized weather data

use serde::{Deserialize, Serialize};

/// A normalized weather observation for a single lookup.
///
/// Built fresh from the provider's reply on every successful lookup and never
/// persisted; a session keeps at most the latest one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// The city the lookup was made for
    pub city: String,
    /// Air temperature in degrees Celsius
    pub temperature_c: f64,
    /// Perceived temperature in degrees Celsius
    pub feels_like_c: f64,
    /// Short condition description, e.g. "light rain"
    pub condition: String,
    /// Relative humidity, 0-100
    pub humidity_pct: u8,
    /// Wind speed in meters per second
    pub wind_speed_mps: f64,
}
