use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub payment_id: String,
    pub booking_id: String,
    pub amount_minor: i64,
    pub number_of_tickets: i64,
    pub full_name: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl From<repository::Payment> for Payment {
    fn from(value: repository::Payment) -> Self {
        Self {
            id: value.id.to_hex(),
            order_id: value.order_id,
            payment_id: value.payment_id,
            booking_id: value.booking_id.to_hex(),
            amount_minor: value.amount_minor,
            number_of_tickets: value.number_of_tickets,
            full_name: value.full_name,
            status: value.status,
            created_at: value.created_at,
        }
    }
}
