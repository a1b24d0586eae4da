mod booking;
mod booking_status;
mod new_comedian_booking;
mod new_ticket_booking;

pub use booking::*;
pub use booking_status::*;
pub use new_comedian_booking::*;
pub use new_ticket_booking::*;
