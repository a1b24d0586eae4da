mod application_status;
mod comedian_profile_update;
mod user;

pub use application_status::*;
pub use comedian_profile_update::*;
pub use user::*;
