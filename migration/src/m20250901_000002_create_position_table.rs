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
                    .table(Position::Table)
                    .if_not_exists()
                    .col(pk_auto(Position::Id))
                    .col(string(Position::Name))
                    .col(string(Position::Code))
                    .col(integer(Position::SportId))
                    .col(text_null(Position::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_position_sport_id")
                            .from(Position::Table, Position::SportId)
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
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Position {
    Table,
    Id,
    Name,
    Code,
    SportId,
    Description,
}
