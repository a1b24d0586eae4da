use super::{BookingsService, BookingsServiceConfig};
use crate::{
    auth::{require_all_roles, Role, User},
    dto::{input, output},
    error::Error,
    repository::{
        self, BookingStatus, BookingsRepository, NewComedianBooking, NewTicketBooking,
        UsersRepository,
    },
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct BookingsServiceImpl {
    config: BookingsServiceConfig,
    bookings_repository: Arc<dyn BookingsRepository>,
    users_repository: Arc<dyn UsersRepository>,
}

impl BookingsServiceImpl {
    pub fn new(
        config: BookingsServiceConfig,
        bookings_repository: Arc<dyn BookingsRepository>,
        users_repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            config,
            bookings_repository,
            users_repository,
        }
    }

    async fn create_ticket_booking(
        &self,
        user: &User,
        account_id: ObjectId,
        booking: input::Booking,
        created_at: OffsetDateTime,
    ) -> Result<ObjectId, Error> {
        let number_of_tickets = booking
            .number_of_tickets
            .ok_or(Error::Validation("number_of_tickets is required"))?;

        if number_of_tickets < 1 || number_of_tickets > self.config.max_tickets_per_booking {
            return Err(Error::Validation("number_of_tickets out of range"));
        }

        // Advisory check. The authoritative one runs inside
        // the approval transaction.
        let committed = self.bookings_repository.committed_seats().await?;
        if committed + u64::from(number_of_tickets) > u64::from(self.config.venue_capacity) {
            return Err(Error::CapacityExceeded);
        }

        let id = self
            .bookings_repository
            .insert_ticket_booking(NewTicketBooking {
                user_id: account_id,
                full_name: booking.full_name,
                email: user.email.clone(),
                phone: booking.phone,
                number_of_tickets: i64::from(number_of_tickets),
                unit_price_minor: self.config.ticket_price_minor,
                created_at,
            })
            .await?;

        Ok(id)
    }

    async fn create_comedian_booking(
        &self,
        user: &User,
        account_id: ObjectId,
        booking: input::Booking,
        created_at: OffsetDateTime,
    ) -> Result<ObjectId, Error> {
        let comedian_id = booking
            .comedian_id
            .as_deref()
            .ok_or(Error::Validation("comedian_id is required"))?;
        let comedian_id = ObjectId::parse_str(comedian_id)
            .map_err(|_| Error::Validation("invalid comedian id"))?;
        let event_date = booking
            .event_date
            .ok_or(Error::Validation("event_date is required"))?;
        let event_location = booking
            .event_location
            .ok_or(Error::Validation("event_location is required"))?;
        let event_duration_minutes = booking
            .event_duration_minutes
            .ok_or(Error::Validation("event_duration_minutes is required"))?;

        self.users_repository
            .find_approved_comedian(comedian_id)
            .await?
            .ok_or(Error::ComedianNotExist)?;

        let id = self
            .bookings_repository
            .insert_comedian_booking(NewComedianBooking {
                user_id: account_id,
                full_name: booking.full_name,
                email: user.email.clone(),
                phone: booking.phone,
                comedian_id,
                event_date,
                event_location,
                event_duration_minutes: i64::from(event_duration_minutes),
                created_at,
            })
            .await?;

        Ok(id)
    }
}

#[async_trait]
impl BookingsService for BookingsServiceImpl {
    ///
    /// Creates pending booking owned by the authenticated user.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when no account matches the user's email
    /// - [Error::Validation] when required fields are missing or out of range
    /// - [Error::CapacityExceeded] when a ticket booking wouldn't fit
    ///   in the venue
    /// - [Error::ComedianNotExist] when a comedian booking targets
    ///   an unknown or unapproved comedian
    ///
    async fn create_booking(
        &self,
        user: User,
        booking: input::Booking,
    ) -> Result<output::BookingId, Error> {
        tracing::info!("creating booking");

        let account = self
            .users_repository
            .find_by_email(&user.email)
            .await?
            .ok_or(Error::UserNotExist)?;

        let created_at = OffsetDateTime::now_utc();
        let id = match booking.is_comedian_booking {
            true => {
                self.create_comedian_booking(&user, account.id, booking, created_at)
                    .await?
            }
            false => {
                self.create_ticket_booking(&user, account.id, booking, created_at)
                    .await?
            }
        };
        tracing::info!(%id, "created booking");

        Ok(output::BookingId { id: id.to_hex() })
    }

    async fn find_own_bookings(&self, user: User) -> Result<Vec<output::Booking>, Error> {
        let bookings = self
            .bookings_repository
            .find_by_email(&user.email)
            .await?
            .into_iter()
            .map(output::Booking::from)
            .collect();

        Ok(bookings)
    }

    ///
    /// Removes user's own booking as long as it hasn't been moderated.
    ///
    /// Bookings of other users are reported as not existing
    /// to avoid leaking their ids.
    ///
    async fn cancel_booking(&self, user: User, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "cancelling booking");

        let booking = self
            .bookings_repository
            .find(id)
            .await?
            .ok_or(Error::BookingNotExist)?;

        if booking.email != user.email {
            return Err(Error::BookingNotExist);
        }
        if booking.status != BookingStatus::Pending {
            return Err(Error::Validation("only pending bookings can be cancelled"));
        }

        match self.bookings_repository.delete_pending(id, &user.email).await {
            Ok(()) => {
                tracing::info!(%id, "cancelled booking");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::BookingNotExist),
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn venue_status(&self) -> Result<output::VenueStatus, Error> {
        let committed_seats = self.bookings_repository.committed_seats().await?;
        let remaining_seats = u64::from(self.config.venue_capacity).saturating_sub(committed_seats);

        Ok(output::VenueStatus {
            capacity: self.config.venue_capacity,
            committed_seats,
            remaining_seats,
            is_full: remaining_seats == 0,
        })
    }

    async fn find_all_bookings(&self, user: User) -> Result<Vec<output::Booking>, Error> {
        require_all_roles(&user, &[Role::Admin])?;

        let bookings = self
            .bookings_repository
            .find_all()
            .await?
            .into_iter()
            .map(output::Booking::from)
            .collect();

        Ok(bookings)
    }

    ///
    /// Resolves pending booking as approved or declined.
    ///
    /// Approving a ticket booking recounts committed seats inside
    /// a transaction, so the venue can never be oversold. Declining
    /// is unconditional. Comedian bookings don't occupy seats so
    /// their approval skips the count.
    ///
    /// ### Errors
    /// - [Error::MissingRole] when user is not an admin
    /// - [Error::BookingNotExist] when booking does not exist
    /// - [Error::Validation] when booking is no longer pending
    /// - [Error::CapacityExceeded] when approval wouldn't fit in the venue
    ///
    async fn set_booking_status(
        &self,
        user: User,
        id: ObjectId,
        update: input::BookingStatusUpdate,
    ) -> Result<(), Error> {
        require_all_roles(&user, &[Role::Admin])?;

        tracing::info!(%id, status = ?update.status, "moderating booking");

        let booking = self
            .bookings_repository
            .find(id)
            .await?
            .ok_or(Error::BookingNotExist)?;

        if booking.status != BookingStatus::Pending {
            return Err(Error::Validation("booking is not pending"));
        }

        let updated_at = OffsetDateTime::now_utc();
        let update_result = match update.status {
            input::BookingDecision::Approved if booking.is_comedian_booking => {
                self.bookings_repository.approve(id, updated_at).await
            }
            input::BookingDecision::Approved => {
                self.bookings_repository
                    .approve_within_capacity(id, self.config.venue_capacity, updated_at)
                    .await
            }
            input::BookingDecision::Declined => {
                self.bookings_repository.decline(id, updated_at).await
            }
        };

        match update_result {
            Ok(()) => {
                tracing::info!(%id, "moderated booking");
                Ok(())
            }
            Err(repository::Error::CapacityExceeded) => Err(Error::CapacityExceeded),
            Err(repository::Error::NoDocumentUpdated) => {
                Err(Error::Validation("booking is not pending"))
            }
            Err(err) => Err(Error::Database(err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use repository::{MockBookingsRepository, MockUsersRepository};
    use uuid::Uuid;

    fn config() -> BookingsServiceConfig {
        BookingsServiceConfig {
            venue_capacity: 50,
            max_tickets_per_booking: 50,
            ticket_price_minor: 14900,
        }
    }

    fn user() -> User {
        User::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            vec![],
        )
    }

    fn admin() -> User {
        User::new(
            Uuid::new_v4(),
            "admin@example.com".to_string(),
            vec![Role::Admin.as_ref().to_string()],
        )
    }

    fn account(email: &str) -> repository::User {
        repository::User {
            id: ObjectId::new(),
            username: "user".to_string(),
            email: email.to_string(),
            phone: None,
            is_comedian: false,
            comedian_profile: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    fn ticket_booking_input(number_of_tickets: u32) -> input::Booking {
        input::Booking {
            full_name: "Jan Kowalski".to_string(),
            phone: "+48123456789".to_string(),
            number_of_tickets: Some(number_of_tickets),
            is_comedian_booking: false,
            comedian_id: None,
            event_date: None,
            event_location: None,
            event_duration_minutes: None,
        }
    }

    fn comedian_booking_input(comedian_id: ObjectId) -> input::Booking {
        input::Booking {
            full_name: "Jan Kowalski".to_string(),
            phone: "+48123456789".to_string(),
            number_of_tickets: None,
            is_comedian_booking: true,
            comedian_id: Some(comedian_id.to_hex()),
            event_date: Some(OffsetDateTime::now_utc()),
            event_location: Some("Warsaw".to_string()),
            event_duration_minutes: Some(60),
        }
    }

    fn stored_booking(
        id: ObjectId,
        email: &str,
        status: BookingStatus,
        is_comedian_booking: bool,
    ) -> repository::Booking {
        repository::Booking {
            id,
            user_id: ObjectId::new(),
            full_name: "Jan Kowalski".to_string(),
            email: email.to_string(),
            phone: "+48123456789".to_string(),
            number_of_tickets: (!is_comedian_booking).then_some(2),
            unit_price_minor: (!is_comedian_booking).then_some(14900),
            is_comedian_booking,
            comedian_id: is_comedian_booking.then(ObjectId::new),
            event_date: is_comedian_booking.then(OffsetDateTime::now_utc),
            event_location: is_comedian_booking.then(|| "Warsaw".to_string()),
            event_duration_minutes: is_comedian_booking.then_some(60),
            status,
            payment_id: None,
            payment_status: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn create_booking_account_not_exist() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|_| Ok(None));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let create_result = service
            .create_booking(user(), ticket_booking_input(2))
            .await;

        assert!(matches!(create_result, Err(Error::UserNotExist)));
    }

    #[tokio::test]
    async fn create_ticket_booking_tickets_missing() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let mut booking = ticket_booking_input(2);
        booking.number_of_tickets = None;

        let create_result = service.create_booking(user(), booking).await;

        assert!(matches!(create_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_ticket_booking_zero_tickets() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let create_result = service
            .create_booking(user(), ticket_booking_input(0))
            .await;

        assert!(matches!(create_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_ticket_booking_too_many_tickets() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let create_result = service
            .create_booking(user(), ticket_booking_input(51))
            .await;

        assert!(matches!(create_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_ticket_booking_venue_sold_out() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository
            .expect_committed_seats()
            .returning(|| Ok(48));
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let create_result = service
            .create_booking(user(), ticket_booking_input(5))
            .await;

        assert!(matches!(create_result, Err(Error::CapacityExceeded)));
    }

    #[tokio::test]
    async fn create_ticket_booking_fits_in_venue() {
        let inserted_id = ObjectId::new();
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository
            .expect_committed_seats()
            .returning(|| Ok(48));
        bookings_repository
            .expect_insert_ticket_booking()
            .withf(|booking| {
                booking.number_of_tickets == 2 && booking.unit_price_minor == 14900
            })
            .returning(move |_| Ok(inserted_id));
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let created = service
            .create_booking(user(), ticket_booking_input(2))
            .await
            .unwrap();

        assert_eq!(created.id, inserted_id.to_hex());
    }

    #[tokio::test]
    async fn create_comedian_booking_missing_event_fields() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let mut booking = comedian_booking_input(ObjectId::new());
        booking.event_location = None;

        let create_result = service.create_booking(user(), booking).await;

        assert!(matches!(create_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_comedian_booking_comedian_not_approved() {
        let bookings_repository = MockBookingsRepository::new();
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        users_repository
            .expect_find_approved_comedian()
            .returning(|_| Ok(None));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let create_result = service
            .create_booking(user(), comedian_booking_input(ObjectId::new()))
            .await;

        assert!(matches!(create_result, Err(Error::ComedianNotExist)));
    }

    #[tokio::test]
    async fn create_comedian_booking_skips_seat_accounting() {
        let inserted_id = ObjectId::new();
        let comedian_id = ObjectId::new();
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository
            .expect_insert_comedian_booking()
            .withf(move |booking| booking.comedian_id == comedian_id)
            .returning(move |_| Ok(inserted_id));
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_by_email()
            .returning(|email| Ok(Some(account(email))));
        users_repository
            .expect_find_approved_comedian()
            .returning(|id| {
                let mut comedian = account("comedian@example.com");
                comedian.id = id;
                comedian.is_comedian = true;
                Ok(Some(comedian))
            });
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(users_repository),
        );

        let created = service
            .create_booking(user(), comedian_booking_input(comedian_id))
            .await
            .unwrap();

        assert_eq!(created.id, inserted_id.to_hex());
    }

    #[tokio::test]
    async fn cancel_booking_not_exist() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|_| Ok(None));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let cancel_result = service.cancel_booking(user(), ObjectId::new()).await;

        assert!(matches!(cancel_result, Err(Error::BookingNotExist)));
    }

    #[tokio::test]
    async fn cancel_booking_other_user() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "someone.else@example.com",
                BookingStatus::Pending,
                false,
            )))
        });
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let cancel_result = service.cancel_booking(user(), ObjectId::new()).await;

        assert!(matches!(cancel_result, Err(Error::BookingNotExist)));
    }

    #[tokio::test]
    async fn cancel_booking_already_moderated() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Approved,
                false,
            )))
        });
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let cancel_result = service.cancel_booking(user(), ObjectId::new()).await;

        assert!(matches!(cancel_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn cancel_booking_pending_owned() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Pending,
                false,
            )))
        });
        bookings_repository
            .expect_delete_pending()
            .returning(|_, _| Ok(()));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let cancel_result = service.cancel_booking(user(), ObjectId::new()).await;

        assert!(cancel_result.is_ok());
    }

    #[tokio::test]
    async fn venue_status_seats_remaining() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository
            .expect_committed_seats()
            .returning(|| Ok(48));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let status = service.venue_status().await.unwrap();

        assert_eq!(status.capacity, 50);
        assert_eq!(status.committed_seats, 48);
        assert_eq!(status.remaining_seats, 2);
        assert_eq!(status.is_full, false);
    }

    #[tokio::test]
    async fn venue_status_full() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository
            .expect_committed_seats()
            .returning(|| Ok(50));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let status = service.venue_status().await.unwrap();

        assert_eq!(status.remaining_seats, 0);
        assert_eq!(status.is_full, true);
    }

    #[tokio::test]
    async fn find_all_bookings_missing_role() {
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(MockBookingsRepository::new()),
            Arc::new(MockUsersRepository::new()),
        );

        let find_result = service.find_all_bookings(user()).await;

        assert!(matches!(find_result, Err(Error::MissingRole)));
    }

    #[tokio::test]
    async fn set_booking_status_missing_role() {
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(MockBookingsRepository::new()),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                user(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(matches!(update_result, Err(Error::MissingRole)));
    }

    #[tokio::test]
    async fn set_booking_status_not_exist() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|_| Ok(None));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(matches!(update_result, Err(Error::BookingNotExist)));
    }

    #[tokio::test]
    async fn set_booking_status_already_moderated() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Declined,
                false,
            )))
        });
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(matches!(update_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn set_booking_status_approve_capacity_exceeded() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Pending,
                false,
            )))
        });
        bookings_repository
            .expect_approve_within_capacity()
            .returning(|_, _, _| Err(repository::Error::CapacityExceeded));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(matches!(update_result, Err(Error::CapacityExceeded)));
    }

    #[tokio::test]
    async fn set_booking_status_approve_ticket_booking() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Pending,
                false,
            )))
        });
        bookings_repository
            .expect_approve_within_capacity()
            .withf(|_, capacity, _| *capacity == 50)
            .returning(|_, _, _| Ok(()));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(update_result.is_ok());
    }

    #[tokio::test]
    async fn set_booking_status_approve_comedian_booking_skips_capacity() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Pending,
                true,
            )))
        });
        bookings_repository
            .expect_approve()
            .returning(|_, _| Ok(()));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Approved,
                },
            )
            .await;

        assert!(update_result.is_ok());
    }

    #[tokio::test]
    async fn set_booking_status_decline_without_seat_accounting() {
        let mut bookings_repository = MockBookingsRepository::new();
        bookings_repository.expect_find().returning(|id| {
            Ok(Some(stored_booking(
                id,
                "user@example.com",
                BookingStatus::Pending,
                false,
            )))
        });
        bookings_repository
            .expect_decline()
            .returning(|_, _| Ok(()));
        let service = BookingsServiceImpl::new(
            config(),
            Arc::new(bookings_repository),
            Arc::new(MockUsersRepository::new()),
        );

        let update_result = service
            .set_booking_status(
                admin(),
                ObjectId::new(),
                input::BookingStatusUpdate {
                    status: input::BookingDecision::Declined,
                },
            )
            .await;

        assert!(update_result.is_ok());
    }
}
