mod dto;
mod error;
mod http_payment_gateway;
mod payment_gateway;

pub use dto::*;
pub use error::*;
pub use http_payment_gateway::*;
pub use payment_gateway::*;
