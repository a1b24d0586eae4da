mod dto;
mod payments_service;
mod payments_service_impl;
mod signature;

pub use dto::PaymentsServiceConfig;
pub use payments_service::*;
pub use payments_service_impl::*;
