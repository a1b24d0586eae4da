mod booking;
mod booking_status_update;
mod comedian_registration;
mod comedian_status_update;
mod payment_confirmation;
mod payment_order;

pub use booking::*;
pub use booking_status_update::*;
pub use comedian_registration::*;
pub use comedian_status_update::*;
pub use payment_confirmation::*;
pub use payment_order::*;
