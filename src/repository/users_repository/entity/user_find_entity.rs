use crate::repository::ApplicationStatus;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_comedian: bool,
    pub comedian_profile: Option<ComedianProfileFindEntity>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Deserialize)]
pub struct ComedianProfileFindEntity {
    pub stage_name: String,
    pub bio: String,
    pub experience_years: Option<i64>,
    pub status: ApplicationStatus,
}
