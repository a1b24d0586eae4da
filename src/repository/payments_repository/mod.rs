mod dto;
mod entity;
mod payments_repository;
mod payments_repository_impl;

pub use dto::*;
pub use payments_repository::*;
pub use payments_repository_impl::*;
