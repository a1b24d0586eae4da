use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComediansService: Send + Sync {
    async fn register(
        &self,
        user: User,
        registration: input::ComedianRegistration,
    ) -> Result<(), Error>;

    async fn find_applications(&self, user: User) -> Result<Vec<output::Comedian>, Error>;

    async fn set_application_status(
        &self,
        user: User,
        id: ObjectId,
        update: input::ComedianStatusUpdate,
    ) -> Result<(), Error>;
}
