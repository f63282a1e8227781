//! Service catalog module

pub mod handlers;

pub use handlers::*;
