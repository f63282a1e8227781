//! Fixtures shared by database-backed tests

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use super::migrator::Migrator;
use super::repositories::SeaOrmRepositoryProvider;
use super::{init_database, DatabaseConfig};
use crate::domain::{
    Employee, NewPerson, NewService, Person, PersonRole, RepositoryProvider, Service,
    ServiceCategory,
};

/// Fresh in-memory database with all migrations applied.
pub async fn memory_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn memory_repos() -> (DatabaseConnection, SeaOrmRepositoryProvider) {
    let db = memory_db().await;
    let repos = SeaOrmRepositoryProvider::new(db.clone());
    (db, repos)
}

pub async fn person(repos: &dyn RepositoryProvider, first_name: &str, role: PersonRole) -> Person {
    repos
        .persons()
        .create(NewPerson {
            first_name: first_name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}-{}@salon.test", first_name.to_lowercase(), Uuid::new_v4().simple()),
            password_hash: "not-a-real-hash".to_string(),
            role,
        })
        .await
        .expect("create person")
}

pub async fn employee(
    repos: &dyn RepositoryProvider,
    first_name: &str,
    role: PersonRole,
    tenure_years: i32,
) -> Employee {
    let p = person(repos, first_name, role).await;
    repos
        .employees()
        .create(p.id, tenure_years)
        .await
        .expect("promote to employee")
}

pub async fn service(
    repos: &dyn RepositoryProvider,
    name: &str,
    category: ServiceCategory,
) -> Service {
    repos
        .services()
        .create(NewService {
            name: name.to_string(),
            category,
            price: 2500,
            duration_minutes: 45,
        })
        .await
        .expect("create service")
}
