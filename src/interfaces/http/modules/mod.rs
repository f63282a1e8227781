pub mod auth;
pub mod employees;
pub mod health;
pub mod request_id;
pub mod services;
