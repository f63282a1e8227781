//! Employee directory queries

use std::sync::Arc;

use tracing::debug;

use crate::application::access::OwnerAccess;
use crate::domain::{DomainResult, Employee, EmployeeFilter, RepositoryProvider};
use crate::shared::PaginatedResult;

pub struct EmployeeQueryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EmployeeQueryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Filtered, sorted page of employees. Owner only.
    pub async fn list_employees(
        &self,
        access: &OwnerAccess,
        filter: EmployeeFilter,
    ) -> DomainResult<PaginatedResult<Employee>> {
        debug!(owner_id = access.owner_id(), ?filter, "Listing employees");
        self.repos.employees().list(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::access::Caller;
    use crate::domain::{EmployeeSort, EmployeeSortField, PersonRole, SortOrder};
    use crate::infrastructure::database::test_support::{employee, memory_repos};

    #[tokio::test]
    async fn owner_lists_filtered_employees() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Ana", PersonRole::MakeupArtist, 2).await;
        employee(&repos, "Maja", PersonRole::MakeupArtist, 10).await;
        employee(&repos, "Milica", PersonRole::NailTechnician, 7).await;

        let service = EmployeeQueryService::new(Arc::new(repos));
        let access = Caller::new(1, PersonRole::Owner).require_owner().unwrap();

        let filter = EmployeeFilter {
            role: Some(PersonRole::MakeupArtist),
            sort: EmployeeSort {
                field: EmployeeSortField::Tenure,
                order: SortOrder::Desc,
            },
            ..Default::default()
        };
        let page = service.list_employees(&access, filter).await.unwrap();

        assert_eq!(page.total, 2);
        let tenures: Vec<_> = page.items.iter().map(|e| e.tenure_years).collect();
        assert_eq!(tenures, vec![10, 2]);
    }
}
