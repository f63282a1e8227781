use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, NewPerson, Person, PersonRepository, PersonRole};
use crate::infrastructure::database::entities::person;

pub struct SeaOrmPersonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn role_to_domain(role: person::PersonRole) -> PersonRole {
    match role {
        person::PersonRole::Owner => PersonRole::Owner,
        person::PersonRole::MakeupArtist => PersonRole::MakeupArtist,
        person::PersonRole::NailTechnician => PersonRole::NailTechnician,
        person::PersonRole::Client => PersonRole::Client,
    }
}

pub(super) fn role_to_entity(role: PersonRole) -> person::PersonRole {
    match role {
        PersonRole::Owner => person::PersonRole::Owner,
        PersonRole::MakeupArtist => person::PersonRole::MakeupArtist,
        PersonRole::NailTechnician => person::PersonRole::NailTechnician,
        PersonRole::Client => person::PersonRole::Client,
    }
}

fn person_model_to_domain(model: person::Model) -> Person {
    Person {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        password_hash: model.password_hash,
        role: role_to_domain(model.role),
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn create(&self, dto: NewPerson) -> DomainResult<Person> {
        let new_person = person::ActiveModel {
            first_name_lower: Set(person::search_name(&dto.first_name)),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email.to_lowercase()),
            password_hash: Set(dto.password_hash),
            role: Set(role_to_entity(dto.role)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = new_person.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Validation("Email already exists".to_string())
            } else {
                DomainError::from(e)
            }
        })?;

        debug!(person_id = model.id, role = ?model.role, "Person created");
        Ok(person_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Person>> {
        let model = person::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(person_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Person>> {
        let model = person::Entity::find()
            .filter(person::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await?;
        Ok(model.map(person_model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(person::Entity::find().count(&self.db).await?)
    }
}
