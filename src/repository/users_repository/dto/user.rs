use super::ApplicationStatus;
use crate::repository::users_repository::entity::{ComedianProfileFindEntity, UserFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct User {
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_comedian: bool,
    pub comedian_profile: Option<ComedianProfile>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub struct ComedianProfile {
    pub stage_name: String,
    pub bio: String,
    pub experience_years: Option<i64>,
    pub status: ApplicationStatus,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            id: value._id,
            username: value.username,
            email: value.email,
            phone: value.phone,
            is_comedian: value.is_comedian,
            comedian_profile: value.comedian_profile.map(ComedianProfile::from),
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}

impl From<ComedianProfileFindEntity> for ComedianProfile {
    fn from(value: ComedianProfileFindEntity) -> Self {
        Self {
            stage_name: value.stage_name,
            bio: value.bio,
            experience_years: value.experience_years,
            status: value.status,
        }
    }
}
