use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_sport_table::Sport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discipline::Table)
                    .if_not_exists()
                    .col(pk_auto(Discipline::Id))
                    .col(string(Discipline::Name))
                    .col(string(Discipline::Code))
                    .col(integer(Discipline::SportId))
                    .col(text_null(Discipline::Description))
                    .col(string_null(Discipline::Unit))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discipline_sport_id")
                            .from(Discipline::Table, Discipline::SportId)
                            .to(Sport::Table, Sport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discipline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Discipline {
    Table,
    Id,
    Name,
    Code,
    SportId,
    Description,
    Unit,
}
