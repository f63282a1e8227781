//! Login use-case
//!
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{DomainError, DomainResult, Person, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::verify_password;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub person: Person,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    /// Authenticate by email + password and return a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(person) = self.repos.persons().find_by_email(email).await? else {
            warn!("Login attempt for unknown email");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !verify_password(password, &person.password_hash) {
            warn!(person_id = person.id, "Login attempt with wrong password");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = create_token(&person, &self.jwt_config)
            .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))?;

        info!(person_id = person.id, role = %person.role, "Person logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            person,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPerson, PersonRole};
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::crypto::password::hash_password_with_cost;
    use crate::infrastructure::database::test_support::memory_repos;

    async fn service_with_maja() -> AuthService {
        let (_db, repos) = memory_repos().await;
        repos
            .persons()
            .create(NewPerson {
                first_name: "Maja".into(),
                last_name: "Petrović".into(),
                email: "maja@salon.rs".into(),
                password_hash: hash_password_with_cost("lozinka123", 4).unwrap(),
                role: PersonRole::MakeupArtist,
            })
            .await
            .unwrap();
        AuthService::new(Arc::new(repos), JwtConfig::default())
    }

    #[tokio::test]
    async fn login_issues_token_with_role() {
        let auth = service_with_maja().await;
        let result = auth.login("MAJA@salon.rs", "lozinka123").await.unwrap();

        let claims = verify_token(&result.token, &JwtConfig::default()).unwrap();
        assert_eq!(claims.person_id(), Some(result.person.id));
        assert_eq!(claims.role, "sminkerka");
        assert_eq!(result.expires_in, 24 * 3600);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let auth = service_with_maja().await;

        let wrong = auth.login("maja@salon.rs", "pogresna").await.unwrap_err();
        let unknown = auth.login("nema@salon.rs", "lozinka123").await.unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(matches!(wrong, DomainError::Unauthorized(_)));
    }
}
