//! Employee ↔ service join-table access

use async_trait::async_trait;

use crate::domain::{DomainResult, Service};

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Validate and replace the employee's whole assignment set in one
    /// transaction. Returns the assignment count after commit.
    ///
    /// Validation failures surface as `DomainError::Invalid` and leave the
    /// previous set untouched.
    async fn replace_assignments(&self, employee_id: i32, service_ids: &[i32]) -> DomainResult<u64>;

    /// Services assigned to one employee, ordered by service id.
    async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Service>>;

    async fn count_for_employee(&self, employee_id: i32) -> DomainResult<u64>;
}
