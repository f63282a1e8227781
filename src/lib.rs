//! # Salon staff service
//!
//! Backend for a beauty salon: the employee directory and the assignment of
//! catalog services to the employees who may perform them.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and the assignment rules
//! - **application**: use-cases, each taking a caller capability
//! - **infrastructure**: SeaORM persistence, seeding, JWT and bcrypt
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: lifecycle (migrate, seed, serve, shut down)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
