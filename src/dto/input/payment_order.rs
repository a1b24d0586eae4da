use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PaymentOrder {
    pub booking_id: String,
}
