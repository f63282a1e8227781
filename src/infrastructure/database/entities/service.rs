//! Service (catalog) entity for database

use sea_orm::entity::prelude::*;

/// Stored service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ServiceCategory {
    #[sea_orm(string_value = "sminkanje")]
    Makeup,
    #[sea_orm(string_value = "manikir")]
    Manicure,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: ServiceCategory,
    pub price: i32,
    pub duration_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_service::Entity")]
    EmployeeServices,
}

impl Related<super::employee_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeServices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
