use super::{Error, GatewayOrder, PaymentGateway};
use axum::async_trait;
use serde::{Deserialize, Serialize};

pub struct HttpPaymentGateway {
    client: reqwest::Client,
    orders_url: String,
    key_id: String,
    key_secret: String,
}

#[derive(Serialize)]
struct CreateOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Deserialize)]
struct CreateOrderResponse {
    id: String,
    amount: i64,
    currency: String,
}

impl HttpPaymentGateway {
    pub fn new(base_url: &str, key_id: String, key_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            orders_url: format!("{}/v1/orders", base_url.trim_end_matches('/')),
            key_id,
            key_secret,
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, Error> {
        tracing::info!(amount_minor, currency, "creating gateway order");

        let response = self
            .client
            .post(&self.orders_url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateOrderRequest {
                amount: amount_minor,
                currency,
                receipt,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Rejected(response.status()));
        }

        let order = response.json::<CreateOrderResponse>().await?;
        tracing::info!(order_id = %order.id, "created gateway order");

        Ok(GatewayOrder {
            order_id: order.id,
            amount_minor: order.amount,
            currency: order.currency,
        })
    }

    fn key_id(&self) -> &str {
        &self.key_id
    }
}
