mod gateway_order;

pub use gateway_order::*;
