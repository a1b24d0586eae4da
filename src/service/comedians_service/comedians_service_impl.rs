use super::ComediansService;
use crate::{
    auth::{require_all_roles, Role, User},
    dto::{input, output},
    error::Error,
    repository::{self, ApplicationStatus, ComedianProfileUpdate, UsersRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct ComediansServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
}

impl ComediansServiceImpl {
    pub fn new(users_repository: Arc<dyn UsersRepository>) -> Self {
        Self { users_repository }
    }
}

#[async_trait]
impl ComediansService for ComediansServiceImpl {
    ///
    /// Submits or resubmits user's comedian application.
    /// Resubmission always moves the application back to pending review.
    ///
    async fn register(
        &self,
        user: User,
        registration: input::ComedianRegistration,
    ) -> Result<(), Error> {
        tracing::info!("registering comedian application");

        let update_result = self
            .users_repository
            .update_comedian_profile(
                &user.email,
                &registration.username,
                &registration.phone,
                ComedianProfileUpdate {
                    stage_name: registration.comedian_profile.stage_name,
                    bio: registration.comedian_profile.bio,
                    experience_years: registration.comedian_profile.experience_years,
                },
                OffsetDateTime::now_utc(),
            )
            .await;

        match update_result {
            Ok(()) => {
                tracing::info!("registered comedian application");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::UserNotExist),
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn find_applications(&self, user: User) -> Result<Vec<output::Comedian>, Error> {
        require_all_roles(&user, &[Role::Admin])?;

        let comedians = self
            .users_repository
            .find_comedians()
            .await?
            .into_iter()
            .map(output::Comedian::from)
            .collect();

        Ok(comedians)
    }

    async fn set_application_status(
        &self,
        user: User,
        id: ObjectId,
        update: input::ComedianStatusUpdate,
    ) -> Result<(), Error> {
        require_all_roles(&user, &[Role::Admin])?;

        tracing::info!(%id, status = ?update.status, "moderating comedian application");

        let status = match update.status {
            input::ComedianDecision::Pending => ApplicationStatus::Pending,
            input::ComedianDecision::Approved => ApplicationStatus::Approved,
            input::ComedianDecision::Declined => ApplicationStatus::Declined,
        };

        let update_result = self
            .users_repository
            .update_application_status(id, status, OffsetDateTime::now_utc())
            .await;

        match update_result {
            Ok(()) => {
                tracing::info!(%id, "moderated comedian application");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::ComedianNotExist),
            Err(err) => Err(Error::Database(err)),
        }
    }
}
