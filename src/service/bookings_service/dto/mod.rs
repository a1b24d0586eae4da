mod bookings_service_config;

pub use bookings_service_config::*;
