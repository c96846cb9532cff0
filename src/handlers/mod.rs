pub mod auth;
pub mod campaign;
pub mod confirmations;
pub mod donations;
pub mod prayers;
pub mod progress;
pub mod uploads;
