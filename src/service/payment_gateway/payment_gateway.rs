use super::{Error, GatewayOrder};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Opens an order at the payment provider.
    /// Amount is always derived on the server, never trusted
    /// from the client.
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, Error>;

    /// Public key the client uses to open the checkout.
    fn key_id(&self) -> &str;
}
