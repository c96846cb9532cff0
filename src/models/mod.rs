pub mod admin;
pub mod auth;
pub mod campaign;
pub mod confirmation;
pub mod donation;
pub mod progress_image;
