//! HTTP handlers for the Weather Stylist service

pub mod auth;
pub mod checkout;
pub mod credits;
pub mod health;
pub mod outfit;
pub mod weather;

pub use auth::{change_password, delete_account, get_profile, login, logout, signup};
pub use checkout::create_checkout_session;
pub use credits::get_credits;
pub use health::health_check;
pub use outfit::{ask_outfit, get_outfit};
pub use weather::get_weather;
