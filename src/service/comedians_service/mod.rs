mod comedians_service;
mod comedians_service_impl;

pub use comedians_service::*;
pub use comedians_service_impl::*;
