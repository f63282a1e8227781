//! Employee entity for database
//!
//! One row per person promoted to staff; the primary key is the person id.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub person_id: i32,
    pub tenure_years: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id",
        on_delete = "Cascade"
    )]
    Person,
    #[sea_orm(has_many = "super::employee_service::Entity")]
    EmployeeServices,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::employee_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeServices.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_service::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_service::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
