use super::dto::{ApplicationStatus, ComedianProfileUpdate, User};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

///
/// Accounts are provisioned by the identity provider.
/// This repository only reads them and maintains comedian profiles.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// Finds comedian with an approved application.
    async fn find_approved_comedian(&self, id: ObjectId) -> Result<Option<User>, Error>;

    async fn find_comedians(&self) -> Result<Vec<User>, Error>;

    /// Creates or replaces the comedian profile of an account.
    /// Resubmission always resets the application to pending review.
    async fn update_comedian_profile(
        &self,
        email: &str,
        username: &str,
        phone: &str,
        profile: ComedianProfileUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error>;

    async fn update_application_status(
        &self,
        id: ObjectId,
        status: ApplicationStatus,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error>;
}
