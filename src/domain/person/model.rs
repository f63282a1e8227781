//! Person (account) domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, ServiceCategory};

/// Account role. Owners manage staff; the two employee roles each perform
/// one service category; clients only book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    /// Salon owner (`vlasnica`)
    Owner,
    /// Makeup artist (`sminkerka`)
    MakeupArtist,
    /// Nail technician (`manikirka`)
    NailTechnician,
    /// Client (`klijent`)
    Client,
}

impl PersonRole {
    pub const ALL: [PersonRole; 4] = [
        Self::Owner,
        Self::MakeupArtist,
        Self::NailTechnician,
        Self::Client,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "vlasnica",
            Self::MakeupArtist => "sminkerka",
            Self::NailTechnician => "manikirka",
            Self::Client => "klijent",
        }
    }

    /// The service category this role may perform, if it is an employee role.
    pub fn performs(&self) -> Option<ServiceCategory> {
        match self {
            Self::MakeupArtist => Some(ServiceCategory::Makeup),
            Self::NailTechnician => Some(ServiceCategory::Manicure),
            Self::Owner | Self::Client => None,
        }
    }

    pub fn is_employee(&self) -> bool {
        self.performs().is_some()
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("Unknown role: {}", s)))
    }
}

/// A person account
#[derive(Debug, Clone)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: PersonRole,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: PersonRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_roles_map_to_categories() {
        assert_eq!(PersonRole::MakeupArtist.performs(), Some(ServiceCategory::Makeup));
        assert_eq!(PersonRole::NailTechnician.performs(), Some(ServiceCategory::Manicure));
        assert!(!PersonRole::Owner.is_employee());
        assert!(!PersonRole::Client.is_employee());
    }

    #[test]
    fn role_round_trips_through_its_tag() {
        for role in PersonRole::ALL {
            assert_eq!(role.as_str().parse::<PersonRole>().unwrap(), role);
        }
        assert!("admin".parse::<PersonRole>().is_err());
    }
}
