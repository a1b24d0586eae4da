use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsService: Send + Sync {
    async fn create_booking(
        &self,
        user: User,
        booking: input::Booking,
    ) -> Result<output::BookingId, Error>;

    async fn find_own_bookings(&self, user: User) -> Result<Vec<output::Booking>, Error>;

    async fn cancel_booking(&self, user: User, id: ObjectId) -> Result<(), Error>;

    async fn venue_status(&self) -> Result<output::VenueStatus, Error>;

    async fn find_all_bookings(&self, user: User) -> Result<Vec<output::Booking>, Error>;

    async fn set_booking_status(
        &self,
        user: User,
        id: ObjectId,
        update: input::BookingStatusUpdate,
    ) -> Result<(), Error>;
}
