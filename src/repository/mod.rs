mod bookings_repository;
mod error;
mod payments_repository;
mod seat_accounting;
mod users_repository;

pub use bookings_repository::*;
pub use error::*;
pub use payments_repository::*;
pub use users_repository::*;
