mod bookings_service;
mod bookings_service_impl;
mod dto;

pub use bookings_service::*;
pub use bookings_service_impl::*;
pub use dto::BookingsServiceConfig;
