//! Employee DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Employee, Service};

/// Employee list item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Role tag (`sminkerka`, `manikirka`)
    pub role: String,
    pub tenure_years: i32,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.person_id,
            full_name: e.full_name(),
            role: e.role.as_str().to_string(),
            first_name: e.first_name,
            last_name: e.last_name,
            tenure_years: e.tenure_years,
        }
    }
}

/// Catalog service as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    /// `sminkanje` or `manikir`
    pub category: String,
    pub price: i32,
    pub duration_minutes: i32,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category: s.category.as_str().to_string(),
            price: s.price,
            duration_minutes: s.duration_minutes,
        }
    }
}

/// Employee list query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListEmployeesParams {
    /// Case-insensitive substring of the first name
    pub name: Option<String>,
    /// Role tag: `sminkerka` or `manikirka`
    #[serde(rename = "type")]
    pub role: Option<String>,
    /// Minimum tenure in years (inclusive)
    pub min_tenure: Option<i32>,
    /// `tenure`, `first_name`, `last_name` or `id`; anything else sorts by id
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub order: Option<String>,
    pub page: Option<u32>,
    /// Page size, 1 to 100 (default 15)
    pub per_page: Option<u32>,
}

/// Replace an employee's assigned services
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignServicesRequest {
    /// Checked together with `serviceIds` so every problem is reported at once
    pub employee_id: i32,
    /// Full desired set; an empty list clears every assignment
    #[validate(length(max = 100, message = "At most 100 services can be assigned at once."))]
    pub service_ids: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignServicesResponse {
    pub assigned_count: u64,
}
