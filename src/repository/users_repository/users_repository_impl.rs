use super::{
    dto::{ApplicationStatus, ComedianProfileUpdate, User},
    entity::UserFindEntity,
    UsersRepository,
};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use time::OffsetDateTime;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_EMAIL: &str = "unique_index_email";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = USERS, "creating collection");
        database.create_collection(USERS).await?;

        let collection = database.collection::<Document>(USERS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_EMAIL.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "email": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_EMAIL.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = USERS,
                index = INDEX_NAME_UNIQUE_EMAIL,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "email": email,
            })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_approved_comedian(&self, id: ObjectId) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": id,
                "is_comedian": true,
                "comedian_profile.status": "approved",
            })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_comedians(&self) -> Result<Vec<User>, Error> {
        let users = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {
                "is_comedian": true,
            })
            .sort(doc! { "created_at": -1 })
            .await?
            .map_ok(User::from)
            .try_collect()
            .await?;

        Ok(users)
    }

    async fn update_comedian_profile(
        &self,
        email: &str,
        username: &str,
        phone: &str,
        profile: ComedianProfileUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "email": email,
                },
                doc! {
                    "$set": {
                        "username": username,
                        "phone": phone,
                        "is_comedian": true,
                        "comedian_profile": {
                            "stage_name": profile.stage_name,
                            "bio": profile.bio,
                            "experience_years": profile.experience_years,
                            "status": "pending",
                        },
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_application_status(
        &self,
        id: ObjectId,
        status: ApplicationStatus,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "_id": id,
                    "is_comedian": true,
                },
                doc! {
                    "$set": {
                        "comedian_profile.status": status.as_ref(),
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
