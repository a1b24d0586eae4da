use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct NewTicketBooking {
    pub user_id: ObjectId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub number_of_tickets: i64,
    pub unit_price_minor: i64,
    pub created_at: OffsetDateTime,
}
