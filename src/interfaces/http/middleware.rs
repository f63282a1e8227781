//! Bearer-token authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::application::Caller;
use crate::domain::PersonRole;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};
use crate::interfaces::http::common::ApiResponse;

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

/// Authentication state
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Caller identity decoded from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub person_id: i32,
    pub email: String,
    pub role: PersonRole,
}

impl AuthenticatedUser {
    /// `None` when the claims do not name a known person id and role.
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        Some(Self {
            person_id: claims.person_id()?,
            role: claims.role.parse().ok()?,
            email: claims.email,
        })
    }

    pub fn caller(&self) -> Caller {
        Caller::new(self.person_id, self.role)
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    let user = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => AuthenticatedUser::from_claims(claims),
        Err(e) => {
            debug!("Rejected bearer token: {}", e);
            None
        }
    };

    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => auth_error_response(AuthError::InvalidToken),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Missing authentication token",
        AuthError::InvalidToken => "Invalid authentication token",
    };

    (StatusCode::UNAUTHORIZED, Json(ApiResponse::<()>::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("Bearer   "), None);
    }

    #[test]
    fn claims_with_unknown_role_are_rejected() {
        let claims = TokenClaims {
            sub: "3".into(),
            email: "x@salon.rs".into(),
            role: "admin".into(),
            exp: 0,
            iat: 0,
            iss: "salon-service".into(),
        };
        assert!(AuthenticatedUser::from_claims(claims).is_none());
    }
}
