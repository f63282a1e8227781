//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod assignment_repository;
pub mod employee_repository;
pub mod person_repository;
pub mod repository_provider;
pub mod service_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
