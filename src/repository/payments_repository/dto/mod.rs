mod new_payment;
mod payment;

pub use new_payment::*;
pub use payment::*;
