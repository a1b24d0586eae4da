mod payments_service_config;

pub use payments_service_config::*;
