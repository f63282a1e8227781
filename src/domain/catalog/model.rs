//! Salon service (catalog entry) domain entity

use std::str::FromStr;

use crate::domain::DomainError;

/// Specialty a service belongs to. Employees perform exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    /// Makeup (`sminkanje`)
    Makeup,
    /// Manicure and nail work (`manikir`)
    Manicure,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [Self::Makeup, Self::Manicure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Makeup => "sminkanje",
            Self::Manicure => "manikir",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("Unknown service category: {}", s)))
    }
}

/// A service offered by the salon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub category: ServiceCategory,
    /// Price in whole currency units
    pub price: i32,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub category: ServiceCategory,
    pub price: i32,
    pub duration_minutes: i32,
}
