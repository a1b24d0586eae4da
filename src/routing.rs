use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output},
    error::Error,
    service::{BookingsService, ComediansService, PaymentsService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/bookings", post(post_booking).get(get_own_bookings))
        .route("/api/v1/bookings/:id", delete(delete_booking))
        .route("/api/v1/payments/order", post(post_payment_order))
        .route("/api/v1/payments/verify", post(post_payment_verification))
        .route("/api/v1/payments", get(get_own_payments))
        .route("/api/v1/comedians", post(post_comedian_registration))
        .route("/api/v1/admin/bookings", get(get_all_bookings))
        .route("/api/v1/admin/bookings/:id/status", put(put_booking_status))
        .route("/api/v1/admin/comedians", get(get_comedian_applications))
        .route(
            "/api/v1/admin/comedians/:id/status",
            put(put_comedian_application_status),
        )
        .route_layer(application_middleware.auth.clone())
        .route("/api/v1/venue/status", get(get_venue_status))
}

fn parse_object_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::Validation("invalid id"))
}

async fn post_booking(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Json(booking): Json<input::Booking>,
) -> Result<(StatusCode, Json<output::BookingId>), Error> {
    let booking_id = bookings_service.create_booking(user, booking).await?;

    Ok((StatusCode::CREATED, Json(booking_id)))
}

async fn get_own_bookings(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Booking>>, Error> {
    let bookings = bookings_service.find_own_bookings(user).await?;

    Ok(Json(bookings))
}

async fn delete_booking(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    bookings_service.cancel_booking(user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_venue_status(
    State(bookings_service): State<Arc<dyn BookingsService>>,
) -> Result<Json<output::VenueStatus>, Error> {
    let venue_status = bookings_service.venue_status().await?;

    Ok(Json(venue_status))
}

async fn post_payment_order(
    State(payments_service): State<Arc<dyn PaymentsService>>,
    Extension(user): Extension<User>,
    Json(order): Json<input::PaymentOrder>,
) -> Result<(StatusCode, Json<output::PaymentOrder>), Error> {
    let order = payments_service.create_order(user, order).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

async fn post_payment_verification(
    State(payments_service): State<Arc<dyn PaymentsService>>,
    Extension(user): Extension<User>,
    Json(confirmation): Json<input::PaymentConfirmation>,
) -> Result<StatusCode, Error> {
    payments_service.verify_payment(user, confirmation).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_own_payments(
    State(payments_service): State<Arc<dyn PaymentsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Payment>>, Error> {
    let payments = payments_service.find_own_payments(user).await?;

    Ok(Json(payments))
}

async fn post_comedian_registration(
    State(comedians_service): State<Arc<dyn ComediansService>>,
    Extension(user): Extension<User>,
    Json(registration): Json<input::ComedianRegistration>,
) -> Result<StatusCode, Error> {
    comedians_service.register(user, registration).await?;

    Ok(StatusCode::CREATED)
}

async fn get_all_bookings(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Booking>>, Error> {
    let bookings = bookings_service.find_all_bookings(user).await?;

    Ok(Json(bookings))
}

async fn put_booking_status(
    State(bookings_service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(update): Json<input::BookingStatusUpdate>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    bookings_service.set_booking_status(user, id, update).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_comedian_applications(
    State(comedians_service): State<Arc<dyn ComediansService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Comedian>>, Error> {
    let comedians = comedians_service.find_applications(user).await?;

    Ok(Json(comedians))
}

async fn put_comedian_application_status(
    State(comedians_service): State<Arc<dyn ComediansService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(update): Json<input::ComedianStatusUpdate>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    comedians_service
        .set_application_status(user, id, update)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
