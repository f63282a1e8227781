//! Assignment aggregate
//!
//! Many-to-many edges between employees and the services they perform.
//! An edge is valid only when the service category matches the employee's role.

pub mod repository;
pub mod rules;

pub use repository::AssignmentRepository;
pub use rules::{check_assignment, distinct_ids};
