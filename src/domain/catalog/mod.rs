//! Service catalog aggregate
//!
//! Reference data: what the salon offers and which specialty each service needs.

pub mod model;
pub mod repository;

pub use model::{NewService, Service, ServiceCategory};
pub use repository::ServiceRepository;
