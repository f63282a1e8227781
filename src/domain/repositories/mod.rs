//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::assignment::AssignmentRepository;
use super::catalog::ServiceRepository;
use super::employee::EmployeeRepository;
use super::person::PersonRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let maja = repos.employees().find_by_id(2).await?;
///     let services = repos.assignments().list_for_employee(2).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn persons(&self) -> &dyn PersonRepository;
    fn employees(&self) -> &dyn EmployeeRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn assignments(&self) -> &dyn AssignmentRepository;
}
