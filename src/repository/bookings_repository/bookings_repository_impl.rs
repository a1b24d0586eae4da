use super::{
    dto::{Booking, NewComedianBooking, NewTicketBooking},
    entity::{BookingFindEntity, ComedianBookingInsertEntity, TicketBookingInsertEntity},
    BookingsRepository,
};
use crate::repository::{
    seat_accounting::{self, committed_seats_pipeline, total_committed_seats},
    Error,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, Database};
use std::sync::Arc;
use time::OffsetDateTime;

const BOOKINGS: &str = "bookings";
const INDEX_NAME_EMAIL: &str = "index_email";
const INDEX_NAME_STATUS: &str = "index_status";

pub struct BookingsRepositoryImpl {
    database: Database,
}

impl BookingsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = BOOKINGS, "creating collection");
        database.create_collection(BOOKINGS).await?;

        let collection = database.collection::<Document>(BOOKINGS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_EMAIL.to_string()) {
            collection
                .create_index(
                    mongodb::IndexModel::builder()
                        .keys(doc! {
                            "email": 1,
                        })
                        .options(
                            mongodb::options::IndexOptions::builder()
                                .name(INDEX_NAME_EMAIL.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = BOOKINGS,
                index = INDEX_NAME_EMAIL,
                "created index"
            );
        }
        if !index_names.contains(&INDEX_NAME_STATUS.to_string()) {
            collection
                .create_index(
                    mongodb::IndexModel::builder()
                        .keys(doc! {
                            "status": 1,
                        })
                        .options(
                            mongodb::options::IndexOptions::builder()
                                .name(INDEX_NAME_STATUS.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = BOOKINGS,
                index = INDEX_NAME_STATUS,
                "created index"
            );
        }

        Ok(Self { database })
    }

    fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, Error> {
        match inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn update_pending_status(
        &self,
        id: ObjectId,
        status: &str,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(BOOKINGS)
            .update_one(
                doc! {
                    "_id": id,
                    "status": "pending",
                },
                doc! {
                    "$set": {
                        "status": status,
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

#[async_trait]
impl BookingsRepository for BookingsRepositoryImpl {
    async fn insert_ticket_booking(&self, booking: NewTicketBooking) -> Result<ObjectId, Error> {
        let insert_entity = TicketBookingInsertEntity::from(&booking);

        let insert_result = self
            .database
            .collection::<TicketBookingInsertEntity>(BOOKINGS)
            .insert_one(insert_entity)
            .await?;

        Self::inserted_object_id(insert_result.inserted_id)
    }

    async fn insert_comedian_booking(
        &self,
        booking: NewComedianBooking,
    ) -> Result<ObjectId, Error> {
        let insert_entity = ComedianBookingInsertEntity::from(&booking);

        let insert_result = self
            .database
            .collection::<ComedianBookingInsertEntity>(BOOKINGS)
            .insert_one(insert_entity)
            .await?;

        Self::inserted_object_id(insert_result.inserted_id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Booking>, Error> {
        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Booking::from);

        Ok(booking)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, Error> {
        let bookings = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find(doc! {
                "email": email,
            })
            .sort(doc! { "created_at": -1 })
            .await?
            .map_ok(Booking::from)
            .try_collect()
            .await?;

        Ok(bookings)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, Error> {
        let bookings = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?
            .map_ok(Booking::from)
            .try_collect()
            .await?;

        Ok(bookings)
    }

    async fn committed_seats(&self) -> Result<u64, Error> {
        let group = self
            .database
            .collection::<Document>(BOOKINGS)
            .aggregate(committed_seats_pipeline())
            .await?
            .try_next()
            .await?;

        let total = total_committed_seats(group);

        Ok(total.max(0) as u64)
    }

    async fn approve_within_capacity(
        &self,
        id: ObjectId,
        capacity: u32,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let collection = self.database.collection::<Document>(BOOKINGS);

        let mut session = self.database.client().start_session().await?;
        session.start_transaction().await?;

        let approve_result = seat_accounting::approve_booking_in_session(
            &collection,
            &mut session,
            id,
            capacity,
            DateTime::from(updated_at),
            doc! {},
        )
        .await;

        match approve_result {
            Ok(()) => {
                session.commit_transaction().await?;
                Ok(())
            }
            Err(err) => {
                let _ = session.abort_transaction().await;
                Err(err)
            }
        }
    }

    async fn approve(&self, id: ObjectId, updated_at: OffsetDateTime) -> Result<(), Error> {
        self.update_pending_status(id, "approved", updated_at).await
    }

    async fn decline(&self, id: ObjectId, updated_at: OffsetDateTime) -> Result<(), Error> {
        self.update_pending_status(id, "declined", updated_at).await
    }

    async fn delete_pending(&self, id: ObjectId, email: &str) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(BOOKINGS)
            .delete_one(doc! {
                "_id": id,
                "email": email,
                "status": "pending",
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
