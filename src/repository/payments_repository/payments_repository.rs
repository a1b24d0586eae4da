use super::dto::{NewPayment, Payment};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    /// Records a completed payment and approves its booking
    /// in a single transaction.
    ///
    /// The payment is inserted first so a concurrent duplicate
    /// hits the unique order id index instead of racing on the
    /// booking update.
    ///
    /// # Errors
    /// - [Error::InsertUniqueViolation] when a payment with the same
    ///   order id already exists
    /// - [Error::CapacityExceeded] when approving the booking would
    ///   exceed `capacity`
    /// - [Error::NoDocumentUpdated] when the booking does not exist
    ///   or is not pending
    async fn insert_completed(&self, payment: NewPayment, capacity: u32)
        -> Result<ObjectId, Error>;

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Payment>, Error>;

    async fn find_by_email(&self, email: &str) -> Result<Vec<Payment>, Error>;
}
