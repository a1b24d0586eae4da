mod dto;
mod middleware;
mod role;
pub mod util;

pub use dto::User;
pub use middleware::JwtAuthLayer;
pub use role::*;

use crate::error::Error;

///
/// Validates that user has all required roles.
///
/// ### Errors
/// - [Error::MissingRole] when any of the roles is missing
///
pub fn require_all_roles(user: &User, roles: &[Role]) -> Result<(), Error> {
    let user_has_all_roles = roles
        .iter()
        .map(|role| role.as_ref())
        .all(|role| user.roles.iter().any(|user_role| user_role == role));

    match user_has_all_roles {
        true => Ok(()),
        false => Err(Error::MissingRole),
    }
}
