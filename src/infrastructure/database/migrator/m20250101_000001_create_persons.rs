//! Create persons table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::FirstName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Persons::FirstNameLower)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Persons::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Persons::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Persons::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Persons::Role)
                            .string_len(20)
                            .not_null()
                            .default("klijent"),
                    )
                    .col(
                        ColumnDef::new(Persons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_role")
                    .table(Persons::Table)
                    .col(Persons::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Persons {
    Table,
    Id,
    FirstName,
    FirstNameLower,
    LastName,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}
