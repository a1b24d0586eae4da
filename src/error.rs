use crate::{repository, service::payment_gateway};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("booking not exist")]
    BookingNotExist,

    #[error("user not exist")]
    UserNotExist,

    #[error("comedian not exist or not approved")]
    ComedianNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("invalid payment signature")]
    InvalidSignature,

    #[error("approval would exceed venue capacity")]
    CapacityExceeded,

    #[error("missing role")]
    MissingRole,

    #[error("payment gateway error: {0}")]
    Gateway(#[from] payment_gateway::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::BookingNotExist | Error::UserNotExist | Error::ComedianNotExist => {
                StatusCode::NOT_FOUND
            }
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidSignature => StatusCode::UNPROCESSABLE_ENTITY,
            Error::CapacityExceeded => StatusCode::CONFLICT,
            Error::MissingRole => StatusCode::FORBIDDEN,
            Error::Gateway(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
