pub mod assignment;
pub mod catalog;
pub mod employee;
pub mod person;
pub mod repositories;

// Re-export commonly used types
pub use assignment::{check_assignment, distinct_ids, AssignmentRepository};
pub use catalog::{NewService, Service, ServiceCategory, ServiceRepository};
pub use employee::{
    Employee, EmployeeFilter, EmployeeRepository, EmployeeSort, EmployeeSortField, SortOrder,
};
pub use person::{NewPerson, Person, PersonRepository, PersonRole};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::{DomainError, FieldErrors};
