//! Employee domain entity
//!
//! An employee is a person extended with tenure. Identity and role come from
//! the owning person record.

use crate::domain::{PersonRole, ServiceCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Id of the owning person; also the employee id.
    pub person_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: PersonRole,
    /// Years of service
    pub tenure_years: i32,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Category of services this employee may be assigned.
    pub fn category(&self) -> Option<ServiceCategory> {
        self.role.performs()
    }
}
