use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct NewPayment {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub booking_id: ObjectId,
    pub user_id: ObjectId,
    pub email: String,
    pub amount_minor: i64,
    pub number_of_tickets: i64,
    pub full_name: String,
    pub created_at: OffsetDateTime,
}
