use super::{
    dto::{NewPayment, Payment},
    entity::{PaymentFindEntity, PaymentInsertEntity},
    PaymentsRepository,
};
use crate::repository::{seat_accounting, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    ClientSession, Database, IndexModel,
};
use std::sync::Arc;

const PAYMENTS: &str = "payments";
const BOOKINGS: &str = "bookings";
const INDEX_NAME_UNIQUE_ORDER_ID: &str = "unique_index_order_id";
const INDEX_NAME_EMAIL: &str = "index_email";

pub struct PaymentsRepositoryImpl {
    database: Database,
}

impl PaymentsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = PAYMENTS, "creating collection");
        database.create_collection(PAYMENTS).await?;

        let collection = database.collection::<Document>(PAYMENTS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_ORDER_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "order_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_ORDER_ID.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = PAYMENTS,
                index = INDEX_NAME_UNIQUE_ORDER_ID,
                "created index"
            );
        }
        if !index_names.contains(&INDEX_NAME_EMAIL.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "email": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_EMAIL.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = PAYMENTS,
                index = INDEX_NAME_EMAIL,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn insert_completed_in_session(
        &self,
        session: &mut ClientSession,
        payment: &NewPayment,
        capacity: u32,
    ) -> Result<ObjectId, Error> {
        let insert_entity = PaymentInsertEntity::from(payment);

        let insert_result = self
            .database
            .collection::<PaymentInsertEntity>(PAYMENTS)
            .insert_one(insert_entity)
            .session(&mut *session)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        let id = match insert_result.inserted_id {
            Bson::ObjectId(id) => id,
            _ => {
                return Err(Error::Mongo(
                    ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
                ))
            }
        };

        seat_accounting::approve_booking_in_session(
            &self.database.collection::<Document>(BOOKINGS),
            session,
            payment.booking_id,
            capacity,
            DateTime::from(payment.created_at),
            doc! {
                "payment_id": &payment.payment_id,
                "payment_status": "completed",
            },
        )
        .await?;

        Ok(id)
    }
}

#[async_trait]
impl PaymentsRepository for PaymentsRepositoryImpl {
    async fn insert_completed(
        &self,
        payment: NewPayment,
        capacity: u32,
    ) -> Result<ObjectId, Error> {
        let mut session = self.database.client().start_session().await?;
        session.start_transaction().await?;

        let insert_result = self
            .insert_completed_in_session(&mut session, &payment, capacity)
            .await;

        match insert_result {
            Ok(id) => {
                session.commit_transaction().await?;
                Ok(id)
            }
            Err(err) => {
                let _ = session.abort_transaction().await;
                Err(err)
            }
        }
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Payment>, Error> {
        let payment = self
            .database
            .collection::<PaymentFindEntity>(PAYMENTS)
            .find_one(doc! {
                "order_id": order_id,
            })
            .await?
            .map(Payment::from);

        Ok(payment)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Payment>, Error> {
        let payments = self
            .database
            .collection::<PaymentFindEntity>(PAYMENTS)
            .find(doc! {
                "email": email,
            })
            .sort(doc! { "created_at": -1 })
            .await?
            .map_ok(Payment::from)
            .try_collect()
            .await?;

        Ok(payments)
    }
}
