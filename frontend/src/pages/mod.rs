pub mod kiosk;
pub mod not_found;
pub mod wheel;
