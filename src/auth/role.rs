//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    #[strum(serialize = "standup_hub_admin")]
    Admin,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn admin() {
        let role = Role::Admin.as_ref();
        assert_eq!(role, "standup_hub_admin");
    }
}
