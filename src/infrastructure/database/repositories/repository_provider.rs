//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    AssignmentRepository, EmployeeRepository, PersonRepository, RepositoryProvider,
    ServiceRepository,
};

use super::assignment_repository::SeaOrmAssignmentRepository;
use super::employee_repository::SeaOrmEmployeeRepository;
use super::person_repository::SeaOrmPersonRepository;
use super::service_repository::SeaOrmServiceRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let maja = repos.employees().find_by_id(2).await?;
/// let count = repos.assignments().replace_assignments(2, &[1, 2]).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    persons: SeaOrmPersonRepository,
    employees: SeaOrmEmployeeRepository,
    services: SeaOrmServiceRepository,
    assignments: SeaOrmAssignmentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            persons: SeaOrmPersonRepository::new(db.clone()),
            employees: SeaOrmEmployeeRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            assignments: SeaOrmAssignmentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn persons(&self) -> &dyn PersonRepository {
        &self.persons
    }

    fn employees(&self) -> &dyn EmployeeRepository {
        &self.employees
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn assignments(&self) -> &dyn AssignmentRepository {
        &self.assignments
    }
}
