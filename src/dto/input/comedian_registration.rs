use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComedianRegistration {
    pub username: String,
    pub phone: String,
    pub comedian_profile: ComedianProfileInput,
}

#[derive(Debug, Deserialize)]
pub struct ComedianProfileInput {
    pub stage_name: String,
    pub bio: String,
    pub experience_years: Option<i64>,
}
