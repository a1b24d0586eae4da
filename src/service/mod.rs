mod bookings_service;
mod comedians_service;
pub mod payment_gateway;
mod payments_service;

pub use bookings_service::*;
pub use comedians_service::*;
pub use payments_service::*;
