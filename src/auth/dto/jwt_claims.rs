use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub email: String,
    pub realm_access: JwtClaimsRealmAccess,
}

#[derive(Deserialize)]
pub struct JwtClaimsRealmAccess {
    pub roles: Vec<String>,
}
