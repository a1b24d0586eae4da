mod booking;
mod booking_id;
mod comedian;
mod payment;
mod payment_order;
mod venue_status;

pub use booking::*;
pub use booking_id::*;
pub use comedian::*;
pub use payment::*;
pub use payment_order::*;
pub use venue_status::*;
