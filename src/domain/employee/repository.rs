use async_trait::async_trait;

use super::{Employee, EmployeeFilter};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Page of employees matching every predicate in `filter`.
    async fn list(&self, filter: EmployeeFilter) -> DomainResult<PaginatedResult<Employee>>;

    async fn find_by_id(&self, person_id: i32) -> DomainResult<Option<Employee>>;

    /// Promote an existing person to employee.
    async fn create(&self, person_id: i32, tenure_years: i32) -> DomainResult<Employee>;
}
