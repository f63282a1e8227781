//! Staff use-cases: the employee directory and service assignments

pub mod assignment;
pub mod query;

pub use assignment::AssignmentService;
pub use query::EmployeeQueryService;
