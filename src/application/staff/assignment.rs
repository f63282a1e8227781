//! Service assignment use-cases

use std::sync::Arc;

use tracing::info;

use crate::application::access::{EmployeeScope, OwnerAccess};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Service};

pub struct AssignmentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AssignmentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Replace an employee's assigned services with `service_ids`.
    ///
    /// Returns the number of assignments after the change. Any rejected id
    /// or category mismatch fails the whole call with
    /// [`DomainError::Invalid`] and writes nothing.
    pub async fn sync_assignments(
        &self,
        access: &OwnerAccess,
        employee_id: i32,
        service_ids: &[i32],
    ) -> DomainResult<u64> {
        let assigned = self
            .repos
            .assignments()
            .replace_assignments(employee_id, service_ids)
            .await?;

        info!(
            owner_id = access.owner_id(),
            employee_id,
            requested = service_ids.len(),
            assigned,
            "Employee services synced"
        );
        Ok(assigned)
    }

    /// Services assigned to the scoped employee, by service id.
    pub async fn list_assignments(&self, scope: EmployeeScope) -> DomainResult<Vec<Service>> {
        let employee_id = scope.employee_id();
        if self.repos.employees().find_by_id(employee_id).await?.is_none() {
            return Err(DomainError::not_found("Employee", "id", employee_id));
        }
        self.repos.assignments().list_for_employee(employee_id).await
    }
}
