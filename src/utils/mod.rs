pub mod helpers;
pub mod multipart;
