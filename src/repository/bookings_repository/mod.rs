mod bookings_repository;
mod bookings_repository_impl;
mod dto;
mod entity;

pub use bookings_repository::*;
pub use bookings_repository_impl::*;
pub use dto::*;
