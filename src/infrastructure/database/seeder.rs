//! Demo data for a fresh database
//!
//! Runs only when the `persons` table is empty, so restarting the service
//! never duplicates or overwrites real data. Everything is inserted in one
//! transaction.

use bcrypt::DEFAULT_COST;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use tracing::info;

use super::entities::person::PersonRole;
use super::entities::service::ServiceCategory;
use super::entities::{employee, employee_service, person, service};
use crate::config::SeedConfig;
use crate::infrastructure::crypto::password::hash_password_with_cost;

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { persons: usize, services: usize },
    Skipped,
}

struct StaffMember {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    role: PersonRole,
    tenure_years: i32,
    /// Indexes into `SERVICES`
    services: &'static [usize],
}

const SERVICES: [(&str, ServiceCategory, i32, i32); 4] = [
    ("Dnevni makeup", ServiceCategory::Makeup, 3000, 45),
    ("Večernji makeup", ServiceCategory::Makeup, 4500, 60),
    ("Gellac", ServiceCategory::Manicure, 2500, 60),
    ("Izlivanje noktiju", ServiceCategory::Manicure, 4000, 90),
];

const STAFF: [StaffMember; 3] = [
    StaffMember {
        first_name: "Maja",
        last_name: "Petrović",
        email: "maja@salon.rs",
        role: PersonRole::MakeupArtist,
        tenure_years: 5,
        services: &[0, 1],
    },
    StaffMember {
        first_name: "Ana",
        last_name: "Jovanović",
        email: "ana@salon.rs",
        role: PersonRole::MakeupArtist,
        tenure_years: 2,
        services: &[1],
    },
    StaffMember {
        first_name: "Milica",
        last_name: "Nikolić",
        email: "milica@salon.rs",
        role: PersonRole::NailTechnician,
        tenure_years: 10,
        services: &[2, 3],
    },
];

/// Seed demo data if the database has no persons yet.
pub async fn seed_if_empty(
    db: &DatabaseConnection,
    config: &SeedConfig,
) -> Result<SeedOutcome, Box<dyn std::error::Error + Send + Sync>> {
    seed_with_cost(db, config, DEFAULT_COST).await
}

/// Same as [`seed_if_empty`] with an explicit bcrypt cost.
pub async fn seed_with_cost(
    db: &DatabaseConnection,
    config: &SeedConfig,
    bcrypt_cost: u32,
) -> Result<SeedOutcome, Box<dyn std::error::Error + Send + Sync>> {
    if person::Entity::find().count(db).await? > 0 {
        info!("Database already has persons, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    info!("Seeding demo data...");
    let owner_hash = hash_password_with_cost(&config.owner_password, bcrypt_cost)?;
    let staff_hash = hash_password_with_cost(&config.staff_password, bcrypt_cost)?;

    let txn = db.begin().await?;

    insert_person(
        &txn,
        &config.owner_first_name,
        &config.owner_last_name,
        &config.owner_email,
        &owner_hash,
        PersonRole::Owner,
    )
    .await?;

    let mut service_ids = Vec::with_capacity(SERVICES.len());
    for (name, category, price, duration_minutes) in SERVICES {
        let model = service::ActiveModel {
            name: Set(name.to_string()),
            category: Set(category),
            price: Set(price),
            duration_minutes: Set(duration_minutes),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        service_ids.push(model.id);
    }

    for member in &STAFF {
        let person_id = insert_person(
            &txn,
            member.first_name,
            member.last_name,
            member.email,
            &staff_hash,
            member.role,
        )
        .await?;

        employee::ActiveModel {
            person_id: Set(person_id),
            tenure_years: Set(member.tenure_years),
        }
        .insert(&txn)
        .await?;

        let edges = member.services.iter().map(|&i| employee_service::ActiveModel {
            employee_id: Set(person_id),
            service_id: Set(service_ids[i]),
        });
        employee_service::Entity::insert_many(edges)
            .exec_without_returning(&txn)
            .await?;
    }

    insert_person(
        &txn,
        "Ivana",
        "Ilić",
        "ivana@example.rs",
        &staff_hash,
        PersonRole::Client,
    )
    .await?;

    txn.commit().await?;

    let persons = STAFF.len() + 2;
    info!(
        persons,
        services = SERVICES.len(),
        owner = %config.owner_email,
        "Demo data seeded"
    );
    Ok(SeedOutcome::Seeded {
        persons,
        services: SERVICES.len(),
    })
}

async fn insert_person(
    txn: &DatabaseTransaction,
    first_name: &str,
    last_name: &str,
    email: &str,
    password_hash: &str,
    role: PersonRole,
) -> Result<i32, sea_orm::DbErr> {
    let model = person::ActiveModel {
        first_name: Set(first_name.to_string()),
        first_name_lower: Set(person::search_name(first_name)),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_lowercase()),
        password_hash: Set(password_hash.to_string()),
        role: Set(role),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(txn)
    .await?;
    Ok(model.id)
}
