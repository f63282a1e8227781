//! Person entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Stored role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PersonRole {
    #[sea_orm(string_value = "vlasnica")]
    Owner,
    #[sea_orm(string_value = "sminkerka")]
    MakeupArtist,
    #[sea_orm(string_value = "manikirka")]
    NailTechnician,
    #[sea_orm(string_value = "klijent")]
    Client,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    /// `first_name` lowercased in Rust. SQLite's `LOWER` and `LIKE` only
    /// fold ASCII, so name search matches against this column instead.
    pub first_name_lower: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: PersonRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Value stored in `first_name_lower`.
pub fn search_name(first_name: &str) -> String {
    first_name.to_lowercase()
}
