use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct NewComedianBooking {
    pub user_id: ObjectId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub comedian_id: ObjectId,
    pub event_date: OffsetDateTime,
    pub event_location: String,
    pub event_duration_minutes: i64,
    pub created_at: OffsetDateTime,
}
