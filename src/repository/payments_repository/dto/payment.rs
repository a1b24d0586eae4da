use crate::repository::payments_repository::entity::PaymentFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Payment {
    pub id: ObjectId,
    pub order_id: String,
    pub payment_id: String,
    pub booking_id: ObjectId,
    pub user_id: ObjectId,
    pub email: String,
    pub amount_minor: i64,
    pub number_of_tickets: i64,
    pub full_name: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl From<PaymentFindEntity> for Payment {
    fn from(value: PaymentFindEntity) -> Self {
        Self {
            id: value._id,
            order_id: value.order_id,
            payment_id: value.payment_id,
            booking_id: value.booking_id,
            user_id: value.user_id,
            email: value.email,
            amount_minor: value.amount_minor,
            number_of_tickets: value.booking_details.number_of_tickets,
            full_name: value.booking_details.full_name,
            status: value.status,
            created_at: value.created_at.into(),
        }
    }
}
