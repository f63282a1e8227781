//! Identity module: authentication
//!
//! `AuthService` exchanges credentials for a bearer token.

pub mod service;

pub use service::{AuthResult, AuthService};
