//! Response envelope shared by every endpoint

pub mod validated_json;

use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::PaginatedResult;

pub use validated_json::ValidatedJson;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field path → messages, present only on 422
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn invalid(message: impl Into<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::error(message)
        }
    }
}

/// Paginated list payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Size of the whole filtered set
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T, U: Into<T>> From<PaginatedResult<U>> for PaginatedResponse<T> {
    fn from(result: PaginatedResult<U>) -> Self {
        let result = result.map(Into::into);
        Self {
            items: result.items,
            total: result.total,
            page: result.page,
            per_page: result.per_page,
            total_pages: result.total_pages,
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Malformed query string, wrapped in the envelope instead of axum's plain text.
pub fn query_rejection_response(rejection: QueryRejection) -> ApiError {
    (rejection.status(), Json(ApiResponse::error(rejection.body_text())))
}

/// Unparseable path parameter, wrapped in the envelope.
pub fn path_rejection_response(rejection: PathRejection) -> ApiError {
    (rejection.status(), Json(ApiResponse::error(rejection.body_text())))
}

/// Map a domain error to its status code and envelope.
pub fn domain_error_response(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match e {
        DomainError::Invalid(errors) => {
            ApiResponse::invalid("The given data was invalid.", errors.to_map())
        }
        DomainError::Database(message) => {
            error!("Database error: {}", message);
            ApiResponse::error("Internal server error")
        }
        DomainError::Unauthorized(message) | DomainError::Forbidden(message) => {
            ApiResponse::error(message)
        }
        other => ApiResponse::error(other.to_string()),
    };

    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrors;

    #[test]
    fn invalid_maps_to_422_with_field_map() {
        let mut errors = FieldErrors::new();
        errors.push("serviceIds.0", "The selected service id 999 is invalid.");

        let (status, Json(body)) = domain_error_response(DomainError::Invalid(errors));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["errors"]["serviceIds.0"][0],
            "The selected service id 999 is invalid."
        );
    }

    #[test]
    fn paginated_response_converts_items_and_keeps_totals() {
        use crate::shared::PageRequest;

        let result = PaginatedResult::new(vec![1u8, 2], 5, PageRequest::new(Some(1), Some(2)));
        let response: PaginatedResponse<u32> = result.into();
        assert_eq!(response.items, vec![1u32, 2]);
        assert_eq!((response.total, response.total_pages), (5, 3));
    }

    #[test]
    fn database_details_are_not_leaked() {
        let (status, Json(body)) =
            domain_error_response(DomainError::Database("no such table: persons".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn success_omits_error_fields() {
        let json = serde_json::to_value(ApiResponse::success(3)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 3}));
    }
}
