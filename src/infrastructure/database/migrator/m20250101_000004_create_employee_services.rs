//! Create employee_services join table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_employees::Employees;
use super::m20250101_000003_create_services::Services;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeServices::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeServices::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeeServices::EmployeeId)
                            .col(EmployeeServices::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_services_employee")
                            .from(EmployeeServices::Table, EmployeeServices::EmployeeId)
                            .to(Employees::Table, Employees::PersonId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_services_service")
                            .from(EmployeeServices::Table, EmployeeServices::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_services_service")
                    .table(EmployeeServices::Table)
                    .col(EmployeeServices::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmployeeServices {
    Table,
    EmployeeId,
    ServiceId,
}
