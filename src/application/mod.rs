//! Application layer: use-cases over the domain repositories

pub mod access;
pub mod catalog;
pub mod identity;
pub mod staff;

pub use access::{Caller, EmployeeScope, OwnerAccess};
pub use catalog::CatalogService;
pub use identity::{AuthResult, AuthService};
pub use staff::{AssignmentService, EmployeeQueryService};
