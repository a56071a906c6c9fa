//! Business logic services for the Weather Stylist service

pub mod auth;
pub mod checkout;
pub mod outfit;
pub mod session;
pub mod weather;

pub use auth::AuthService;
pub use checkout::CheckoutService;
pub use outfit::OutfitService;
pub use session::SessionStore;
pub use weather::WeatherService;
