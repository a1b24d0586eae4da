mod payment_find_entity;
mod payment_insert_entity;

pub use payment_find_entity::*;
pub use payment_insert_entity::*;
