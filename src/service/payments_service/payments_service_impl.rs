use super::{signature, PaymentsService, PaymentsServiceConfig};
use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    repository::{
        self, BookingStatus, BookingsRepository, NewPayment, PaymentsRepository, UsersRepository,
    },
    service::payment_gateway::PaymentGateway,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

const CURRENCY: &str = "INR";

pub struct PaymentsServiceImpl {
    config: PaymentsServiceConfig,
    payments_repository: Arc<dyn PaymentsRepository>,
    bookings_repository: Arc<dyn BookingsRepository>,
    users_repository: Arc<dyn UsersRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentsServiceImpl {
    pub fn new(
        config: PaymentsServiceConfig,
        payments_repository: Arc<dyn PaymentsRepository>,
        bookings_repository: Arc<dyn BookingsRepository>,
        users_repository: Arc<dyn UsersRepository>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            config,
            payments_repository,
            bookings_repository,
            users_repository,
            gateway,
        }
    }

    async fn find_owned_ticket_booking(
        &self,
        user: &User,
        booking_id: ObjectId,
    ) -> Result<repository::Booking, Error> {
        let booking = self
            .bookings_repository
            .find(booking_id)
            .await?
            .ok_or(Error::BookingNotExist)?;

        if booking.email != user.email {
            return Err(Error::BookingNotExist);
        }
        if booking.is_comedian_booking {
            return Err(Error::Validation("comedian bookings are not payable"));
        }

        Ok(booking)
    }
}

#[async_trait]
impl PaymentsService for PaymentsServiceImpl {
    ///
    /// Opens a gateway order for user's own pending ticket booking.
    ///
    /// Amount is recomputed from the ticket count and the price
    /// snapshotted on the booking, so the client cannot influence it.
    ///
    async fn create_order(
        &self,
        user: User,
        order: input::PaymentOrder,
    ) -> Result<output::PaymentOrder, Error> {
        tracing::info!("creating payment order");

        let booking_id = ObjectId::parse_str(&order.booking_id)
            .map_err(|_| Error::Validation("invalid booking id"))?;
        let booking = self.find_owned_ticket_booking(&user, booking_id).await?;

        if booking.status != BookingStatus::Pending {
            return Err(Error::Validation("booking is not pending"));
        }

        let number_of_tickets = booking
            .number_of_tickets
            .ok_or(Error::Validation("booking has no tickets"))?;
        let unit_price_minor = booking
            .unit_price_minor
            .ok_or(Error::Validation("booking has no price"))?;
        let amount_minor = number_of_tickets * unit_price_minor;

        let receipt = format!("receipt_{}", booking_id.to_hex());
        let order = self
            .gateway
            .create_order(amount_minor, CURRENCY, &receipt)
            .await?;
        tracing::info!(order_id = %order.order_id, "created payment order");

        Ok(output::PaymentOrder {
            order_id: order.order_id,
            amount_minor: order.amount_minor,
            currency: order.currency,
            key_id: self.gateway.key_id().to_string(),
        })
    }

    ///
    /// Records a confirmed payment and approves its booking.
    ///
    /// Replays of an already recorded order id succeed without
    /// touching the booking again.
    ///
    /// ### Errors
    /// - [Error::InvalidSignature] when the confirmation is not signed
    ///   with the gateway secret
    /// - [Error::BookingNotExist] when booking does not exist or belongs
    ///   to another user
    /// - [Error::UserNotExist] when no account matches the user's email
    /// - [Error::CapacityExceeded] when approving the booking wouldn't
    ///   fit in the venue
    /// - [Error::Validation] when booking is no longer pending
    ///
    async fn verify_payment(
        &self,
        user: User,
        confirmation: input::PaymentConfirmation,
    ) -> Result<(), Error> {
        tracing::info!(order_id = %confirmation.order_id, "verifying payment");

        let signature_valid = signature::verify_signature(
            self.config.gateway_key_secret.as_bytes(),
            &confirmation.order_id,
            &confirmation.payment_id,
            &confirmation.signature,
        );
        if !signature_valid {
            return Err(Error::InvalidSignature);
        }

        let booking_id = ObjectId::parse_str(&confirmation.booking_id)
            .map_err(|_| Error::Validation("invalid booking id"))?;
        let booking = self.find_owned_ticket_booking(&user, booking_id).await?;

        let account = self
            .users_repository
            .find_by_email(&user.email)
            .await?
            .ok_or(Error::UserNotExist)?;

        let recorded = self
            .payments_repository
            .find_by_order_id(&confirmation.order_id)
            .await?;
        if recorded.is_some() {
            tracing::info!(order_id = %confirmation.order_id, "payment already recorded");
            return Ok(());
        }

        let number_of_tickets = booking
            .number_of_tickets
            .ok_or(Error::Validation("booking has no tickets"))?;
        let unit_price_minor = booking
            .unit_price_minor
            .ok_or(Error::Validation("booking has no price"))?;

        let insert_result = self
            .payments_repository
            .insert_completed(
                NewPayment {
                    order_id: confirmation.order_id,
                    payment_id: confirmation.payment_id,
                    signature: confirmation.signature,
                    booking_id,
                    user_id: account.id,
                    email: user.email.clone(),
                    amount_minor: number_of_tickets * unit_price_minor,
                    number_of_tickets,
                    full_name: booking.full_name,
                    created_at: OffsetDateTime::now_utc(),
                },
                self.config.venue_capacity,
            )
            .await;

        match insert_result {
            Ok(id) => {
                tracing::info!(%id, "recorded payment");
                Ok(())
            }
            // lost the race with a concurrent replay of the same order
            Err(repository::Error::InsertUniqueViolation) => {
                tracing::info!("payment already recorded");
                Ok(())
            }
            Err(repository::Error::CapacityExceeded) => Err(Error::CapacityExceeded),
            Err(repository::Error::NoDocumentUpdated) => {
                Err(Error::Validation("booking is not pending"))
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn find_own_payments(&self, user: User) -> Result<Vec<output::Payment>, Error> {
        let payments = self
            .payments_repository
            .find_by_email(&user.email)
            .await?
            .into_iter()
            .map(output::Payment::from)
            .collect();

        Ok(payments)
    }
}
