use crate::repository::payments_repository::dto::NewPayment;
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct PaymentInsertEntity<'a> {
    pub order_id: &'a str,
    pub payment_id: &'a str,
    pub signature: &'a str,
    pub booking_id: ObjectId,
    pub user_id: ObjectId,
    pub email: &'a str,
    pub amount_minor: i64,
    pub status: &'static str,
    pub booking_details: PaymentBookingDetailsInsertEntity<'a>,
    pub created_at: DateTime,
}

#[derive(Serialize)]
pub struct PaymentBookingDetailsInsertEntity<'a> {
    pub number_of_tickets: i64,
    pub full_name: &'a str,
}

impl<'a> From<&'a NewPayment> for PaymentInsertEntity<'a> {
    fn from(value: &'a NewPayment) -> Self {
        Self {
            order_id: &value.order_id,
            payment_id: &value.payment_id,
            signature: &value.signature,
            booking_id: value.booking_id,
            user_id: value.user_id,
            email: &value.email,
            amount_minor: value.amount_minor,
            status: "completed",
            booking_details: PaymentBookingDetailsInsertEntity {
                number_of_tickets: value.number_of_tickets,
                full_name: &value.full_name,
            },
            created_at: DateTime::from(value.created_at),
        }
    }
}
