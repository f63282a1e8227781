//! Employee aggregate
//!
//! Contains the Employee entity, the listing filter, and the repository interface.

pub mod filter;
pub mod model;
pub mod repository;

pub use filter::{EmployeeFilter, EmployeeSort, EmployeeSortField, SortOrder};
pub use model::Employee;
pub use repository::EmployeeRepository;
