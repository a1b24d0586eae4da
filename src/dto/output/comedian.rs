use crate::repository;
use serde::Serialize;

#[derive(Serialize)]
pub struct Comedian {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub stage_name: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i64>,
    pub status: Option<String>,
}

impl From<repository::User> for Comedian {
    fn from(value: repository::User) -> Self {
        let profile = value.comedian_profile;

        Self {
            id: value.id.to_hex(),
            username: value.username,
            email: value.email,
            phone: value.phone,
            stage_name: profile.as_ref().map(|p| p.stage_name.clone()),
            bio: profile.as_ref().map(|p| p.bio.clone()),
            experience_years: profile.as_ref().and_then(|p| p.experience_years),
            status: profile
                .as_ref()
                .map(|p| p.status.as_ref().to_string()),
        }
    }
}
