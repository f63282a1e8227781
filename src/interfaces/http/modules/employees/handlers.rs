//! Employee directory and assignment handlers
//!
//! Each handler turns the authenticated user into a capability first and
//! only then calls the application services.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Extension, Json,
};

use super::dto::{
    AssignServicesRequest, AssignServicesResponse, EmployeeDto, ListEmployeesParams, ServiceDto,
};
use crate::application::{AssignmentService, EmployeeQueryService, EmployeeScope};
use crate::domain::{
    DomainError, DomainResult, EmployeeFilter, EmployeeSort, FieldErrors, PersonRole,
};
use crate::interfaces::http::common::validated_json::ValidatedJsonRejection;
use crate::interfaces::http::common::{
    domain_error_response, path_rejection_response, query_rejection_response, ApiError,
    ApiResponse, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::shared::PageRequest;

#[derive(Clone)]
pub struct EmployeeHandlerState {
    pub queries: Arc<EmployeeQueryService>,
    pub assignments: Arc<AssignmentService>,
}

impl ListEmployeesParams {
    /// Unknown `type` values are rejected; unknown sort keys are not.
    fn into_filter(self) -> DomainResult<EmployeeFilter> {
        let role = match self.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => None,
            Some(tag) => match tag.parse::<PersonRole>() {
                Ok(role) if role.is_employee() => Some(role),
                _ => {
                    let mut errors = FieldErrors::new();
                    errors.push("type", format!("The selected type {} is invalid.", tag));
                    return Err(DomainError::Invalid(errors));
                }
            },
        };

        Ok(EmployeeFilter {
            name: self.name,
            role,
            min_tenure: self.min_tenure,
            sort: EmployeeSort::from_params(self.sort_by.as_deref(), self.order.as_deref()),
            page: PageRequest::new(self.page, self.per_page),
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(ListEmployeesParams),
    responses(
        (status = 200, description = "Filtered employee page", body = ApiResponse<PaginatedResponse<EmployeeDto>>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Owner access required"),
        (status = 422, description = "Unknown employee type")
    )
)]
pub async fn list_employees(
    State(state): State<EmployeeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> Result<Json<ApiResponse<PaginatedResponse<EmployeeDto>>>, ApiError> {
    let access = user.caller().require_owner().map_err(domain_error_response)?;
    let Query(params) = params.map_err(query_rejection_response)?;
    let filter = params.into_filter().map_err(domain_error_response)?;

    let page = state
        .queries
        .list_employees(&access, filter)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(page.into())))
}

async fn assigned_services(
    state: &EmployeeHandlerState,
    scope: EmployeeScope,
) -> Result<Json<ApiResponse<Vec<ServiceDto>>>, ApiError> {
    let services = state
        .assignments
        .list_assignments(scope)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        services.into_iter().map(ServiceDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/services",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Employee (person) id")),
    responses(
        (status = 200, description = "Services assigned to the employee", body = ApiResponse<Vec<ServiceDto>>),
        (status = 400, description = "Non-numeric employee id"),
        (status = 403, description = "Neither the owner nor this employee"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn list_employee_services(
    State(state): State<EmployeeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<ServiceDto>>>, ApiError> {
    let Path(id) = id.map_err(path_rejection_response)?;
    let scope = user.caller().employee_scope(id).map_err(domain_error_response)?;
    assigned_services(&state, scope).await
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/me/services",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Services assigned to the caller", body = ApiResponse<Vec<ServiceDto>>),
        (status = 403, description = "Caller is not an employee")
    )
)]
pub async fn list_my_services(
    State(state): State<EmployeeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ServiceDto>>>, ApiError> {
    let scope = user.caller().own_scope().map_err(domain_error_response)?;
    assigned_services(&state, scope).await
}

#[utoipa::path(
    post,
    path = "/api/v1/employees/services",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = AssignServicesRequest,
    responses(
        (status = 200, description = "Assignments replaced", body = ApiResponse<AssignServicesResponse>),
        (status = 403, description = "Owner access required"),
        (status = 422, description = "Field errors keyed by employeeId, serviceIds or serviceIds.<index>")
    )
)]
pub async fn assign_services(
    State(state): State<EmployeeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<ValidatedJson<AssignServicesRequest>, ValidatedJsonRejection>,
) -> Result<Json<ApiResponse<AssignServicesResponse>>, Response> {
    // Authorization is decided before the body is looked at.
    let access = user
        .caller()
        .require_owner()
        .map_err(|e| domain_error_response(e).into_response())?;
    let ValidatedJson(request) = body.map_err(IntoResponse::into_response)?;

    let assigned_count = state
        .assignments
        .sync_assignments(&access, request.employee_id, &request.service_ids)
        .await
        .map_err(|e| domain_error_response(e).into_response())?;

    Ok(Json(ApiResponse::success(AssignServicesResponse {
        assigned_count,
    })))
}
