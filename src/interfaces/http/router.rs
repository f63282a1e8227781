//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AssignmentService, AuthService, CatalogService, EmployeeQueryService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;

use super::modules::{auth, employees, health, services};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        employees::list_employees,
        employees::list_employee_services,
        employees::list_my_services,
        employees::assign_services,
        services::list_services,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<employees::EmployeeDto>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::PersonInfo,
            employees::EmployeeDto,
            employees::ServiceDto,
            employees::AssignServicesRequest,
            employees::AssignServicesResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Email + password login (JWT)"),
        (name = "Employees", description = "Employee directory and service assignments"),
        (name = "Services", description = "Service catalog"),
    ),
    info(
        title = "Salon Staff Service API",
        version = "1.0.0",
        description = "Employee directory and service assignment API for a beauty salon",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth::AuthHandlerState {
            auth_service: Arc::new(AuthService::new(repos.clone(), jwt_config)),
        });

    // Employee routes (protected; capability checks happen per handler)
    let employee_state = employees::EmployeeHandlerState {
        queries: Arc::new(EmployeeQueryService::new(repos.clone())),
        assignments: Arc::new(AssignmentService::new(repos.clone())),
    };
    let employee_routes = Router::new()
        .route("/", get(employees::list_employees))
        .route("/services", post(employees::assign_services))
        .route("/me/services", get(employees::list_my_services))
        .route("/{id}/services", get(employees::list_employee_services))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(employee_state);

    // Catalog routes (protected)
    let service_routes = Router::new()
        .route("/", get(services::list_services))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(services::CatalogHandlerState {
            catalog: Arc::new(CatalogService::new(repos)),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/employees", employee_routes)
        .nest("/api/v1/services", service_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
