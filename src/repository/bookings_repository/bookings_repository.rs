use super::dto::{Booking, NewComedianBooking, NewTicketBooking};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    async fn insert_ticket_booking(&self, booking: NewTicketBooking) -> Result<ObjectId, Error>;

    async fn insert_comedian_booking(
        &self,
        booking: NewComedianBooking,
    ) -> Result<ObjectId, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Booking>, Error>;

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, Error>;

    async fn find_all(&self) -> Result<Vec<Booking>, Error>;

    /// Sum of tickets across approved ticket bookings.
    /// Comedian bookings don't occupy seats.
    async fn committed_seats(&self) -> Result<u64, Error>;

    /// Moves pending ticket booking to approved state.
    ///
    /// Runs inside a transaction that recounts committed seats,
    /// so concurrent approvals cannot oversell the venue.
    ///
    /// # Errors
    /// - [Error::CapacityExceeded] when approving would exceed `capacity`
    /// - [Error::NoDocumentUpdated] when booking does not exist
    ///   or is not pending
    async fn approve_within_capacity(
        &self,
        id: ObjectId,
        capacity: u32,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error>;

    /// Moves pending booking to approved state without any
    /// seat accounting. Used for comedian bookings.
    async fn approve(&self, id: ObjectId, updated_at: OffsetDateTime) -> Result<(), Error>;

    async fn decline(&self, id: ObjectId, updated_at: OffsetDateTime) -> Result<(), Error>;

    /// Removes booking only when it still belongs to `email`
    /// and hasn't been moderated yet.
    async fn delete_pending(&self, id: ObjectId, email: &str) -> Result<(), Error>;
}
