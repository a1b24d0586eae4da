mod booking_find_entity;
mod booking_insert_entity;

pub use booking_find_entity::*;
pub use booking_insert_entity::*;
