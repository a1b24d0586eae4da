use super::BookingStatus;
use crate::repository::bookings_repository::entity::BookingFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Booking {
    pub id: ObjectId,
    pub user_id: ObjectId,

    pub full_name: String,
    pub email: String,
    pub phone: String,

    /// Present only for ticket bookings
    pub number_of_tickets: Option<i64>,
    /// Price per ticket snapshotted at creation time
    pub unit_price_minor: Option<i64>,

    pub is_comedian_booking: bool,
    pub comedian_id: Option<ObjectId>,
    pub event_date: Option<OffsetDateTime>,
    pub event_location: Option<String>,
    pub event_duration_minutes: Option<i64>,

    pub status: BookingStatus,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<BookingFindEntity> for Booking {
    fn from(value: BookingFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            number_of_tickets: value.number_of_tickets,
            unit_price_minor: value.unit_price_minor,
            is_comedian_booking: value.is_comedian_booking,
            comedian_id: value.comedian_id,
            event_date: value.event_date.map(OffsetDateTime::from),
            event_location: value.event_location,
            event_duration_minutes: value.event_duration_minutes,
            status: value.status,
            payment_id: value.payment_id,
            payment_status: value.payment_status,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
