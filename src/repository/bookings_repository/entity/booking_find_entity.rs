use crate::repository::BookingStatus;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookingFindEntity {
    pub _id: ObjectId,
    pub user_id: ObjectId,

    pub full_name: String,
    pub email: String,
    pub phone: String,

    pub number_of_tickets: Option<i64>,
    pub unit_price_minor: Option<i64>,

    #[serde(default)]
    pub is_comedian_booking: bool,
    pub comedian_id: Option<ObjectId>,
    pub event_date: Option<DateTime>,
    pub event_location: Option<String>,
    pub event_duration_minutes: Option<i64>,

    pub status: BookingStatus,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
