//! Caller capabilities
//!
//! The HTTP boundary turns an authenticated caller into one of the proof
//! values below. Application services take the proof as a parameter instead
//! of re-checking roles, and the private fields mean a proof can only come
//! from a passed check.

use crate::domain::{DomainError, DomainResult, PersonRole};

/// Identity of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub person_id: i32,
    pub role: PersonRole,
}

/// Proof that the caller is the salon owner.
#[derive(Debug, Clone, Copy)]
pub struct OwnerAccess {
    owner_id: i32,
}

impl OwnerAccess {
    pub fn owner_id(&self) -> i32 {
        self.owner_id
    }
}

/// Proof that the caller may read one employee's assignments.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeScope {
    employee_id: i32,
}

impl EmployeeScope {
    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }
}

impl Caller {
    pub fn new(person_id: i32, role: PersonRole) -> Self {
        Self { person_id, role }
    }

    pub fn require_owner(&self) -> DomainResult<OwnerAccess> {
        match self.role {
            PersonRole::Owner => Ok(OwnerAccess {
                owner_id: self.person_id,
            }),
            _ => Err(DomainError::Forbidden("Owner access required".into())),
        }
    }

    /// Owners may read any employee; an employee only themselves.
    pub fn employee_scope(&self, employee_id: i32) -> DomainResult<EmployeeScope> {
        let allowed = match self.role {
            PersonRole::Owner => true,
            role if role.is_employee() => self.person_id == employee_id,
            _ => false,
        };
        if allowed {
            Ok(EmployeeScope { employee_id })
        } else {
            Err(DomainError::Forbidden(
                "Not allowed to view this employee's services".into(),
            ))
        }
    }

    /// Scope over the caller's own assignments. Employees only.
    pub fn own_scope(&self) -> DomainResult<EmployeeScope> {
        if self.role.is_employee() {
            Ok(EmployeeScope {
                employee_id: self.person_id,
            })
        } else {
            Err(DomainError::Forbidden("Employee access required".into()))
        }
    }
}
