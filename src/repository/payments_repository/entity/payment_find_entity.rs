use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaymentFindEntity {
    pub _id: ObjectId,
    pub order_id: String,
    pub payment_id: String,
    pub booking_id: ObjectId,
    pub user_id: ObjectId,
    pub email: String,
    pub amount_minor: i64,
    pub status: String,
    pub booking_details: PaymentBookingDetailsFindEntity,
    pub created_at: DateTime,
}

#[derive(Deserialize)]
pub struct PaymentBookingDetailsFindEntity {
    pub number_of_tickets: i64,
    pub full_name: String,
}
