use serde::Serialize;

///
/// Everything the client needs to open the gateway checkout.
///
#[derive(Serialize)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub key_id: String,
}
