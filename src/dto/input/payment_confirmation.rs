use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub booking_id: String,
}
