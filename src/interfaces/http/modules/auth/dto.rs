//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Person;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub person: PersonInfo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl From<Person> for PersonInfo {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name(),
            email: p.email,
            role: p.role.as_str().to_string(),
        }
    }
}
