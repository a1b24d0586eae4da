use super::ApplicationEnv;
use crate::{
    repository::{BookingsRepositoryImpl, PaymentsRepositoryImpl, UsersRepositoryImpl},
    service::{
        payment_gateway::HttpPaymentGateway, BookingsService, BookingsServiceConfig,
        BookingsServiceImpl, ComediansService, ComediansServiceImpl, PaymentsService,
        PaymentsServiceConfig, PaymentsServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub bookings_service: Arc<dyn BookingsService>,
    pub payments_service: Arc<dyn PaymentsService>,
    pub comedians_service: Arc<dyn ComediansService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let bookings_repository = Arc::new(BookingsRepositoryImpl::new(db.clone()).await?);
    let payments_repository = Arc::new(PaymentsRepositoryImpl::new(db.clone()).await?);
    let users_repository = Arc::new(UsersRepositoryImpl::new(db).await?);

    tracing::info!("creating payment gateway client");
    let payment_gateway = Arc::new(HttpPaymentGateway::new(
        &env.payment_gateway_url,
        env.payment_gateway_key_id.clone(),
        env.payment_gateway_key_secret.clone(),
    ));

    tracing::info!("creating services");
    let config = BookingsServiceConfig {
        venue_capacity: env.venue_capacity,
        max_tickets_per_booking: env.max_tickets_per_booking,
        ticket_price_minor: env.ticket_price_minor,
    };
    let bookings_service = Arc::new(BookingsServiceImpl::new(
        config,
        bookings_repository.clone(),
        users_repository.clone(),
    ));

    let config = PaymentsServiceConfig {
        gateway_key_secret: env.payment_gateway_key_secret.clone(),
        venue_capacity: env.venue_capacity,
    };
    let payments_service = Arc::new(PaymentsServiceImpl::new(
        config,
        payments_repository,
        bookings_repository,
        users_repository.clone(),
        payment_gateway,
    ));

    let comedians_service = Arc::new(ComediansServiceImpl::new(users_repository));

    Ok((
        ApplicationState {
            bookings_service,
            payments_service,
            comedians_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
