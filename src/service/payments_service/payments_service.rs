use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    async fn create_order(
        &self,
        user: User,
        order: input::PaymentOrder,
    ) -> Result<output::PaymentOrder, Error>;

    async fn verify_payment(
        &self,
        user: User,
        confirmation: input::PaymentConfirmation,
    ) -> Result<(), Error>;

    async fn find_own_payments(&self, user: User) -> Result<Vec<output::Payment>, Error>;
}
