//! Employees module: directory listing and service assignments

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
