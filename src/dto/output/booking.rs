use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
pub struct Booking {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,

    pub number_of_tickets: Option<i64>,
    pub unit_price_minor: Option<i64>,

    pub is_comedian_booking: bool,
    pub comedian_id: Option<String>,
    pub event_date: Option<OffsetDateTime>,
    pub event_location: Option<String>,
    pub event_duration_minutes: Option<i64>,

    pub status: String,
    pub payment_status: Option<String>,

    pub created_at: OffsetDateTime,
}

impl From<repository::Booking> for Booking {
    fn from(value: repository::Booking) -> Self {
        Self {
            id: value.id.to_hex(),
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            number_of_tickets: value.number_of_tickets,
            unit_price_minor: value.unit_price_minor,
            is_comedian_booking: value.is_comedian_booking,
            comedian_id: value.comedian_id.map(|id| id.to_hex()),
            event_date: value.event_date,
            event_location: value.event_location,
            event_duration_minutes: value.event_duration_minutes,
            status: value.status.as_ref().to_string(),
            payment_status: value.payment_status,
            created_at: value.created_at,
        }
    }
}
