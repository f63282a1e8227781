//! Service catalog handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::CatalogService;
use crate::domain::{DomainError, FieldErrors, ServiceCategory};
use crate::interfaces::http::common::{domain_error_response, ApiError, ApiResponse};
use crate::interfaces::http::modules::employees::ServiceDto;

#[derive(Clone)]
pub struct CatalogHandlerState {
    pub catalog: Arc<CatalogService>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListServicesParams {
    /// `sminkanje` or `manikir`
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = "Services",
    security(("bearer_auth" = [])),
    params(ListServicesParams),
    responses(
        (status = 200, description = "Service catalog", body = ApiResponse<Vec<ServiceDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unknown category")
    )
)]
pub async fn list_services(
    State(state): State<CatalogHandlerState>,
    Query(params): Query<ListServicesParams>,
) -> Result<Json<ApiResponse<Vec<ServiceDto>>>, ApiError> {
    let category = match params.category.as_deref().filter(|c| !c.trim().is_empty()) {
        None => None,
        Some(raw) => Some(raw.parse::<ServiceCategory>().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.push("category", format!("The selected category {} is invalid.", raw));
            domain_error_response(DomainError::Invalid(errors))
        })?),
    };

    let services = state
        .catalog
        .list_services(category)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        services.into_iter().map(ServiceDto::from).collect(),
    )))
}
