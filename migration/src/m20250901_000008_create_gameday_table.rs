use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000007_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gameday::Table)
                    .if_not_exists()
                    .col(pk_auto(Gameday::Id))
                    .col(string(Gameday::Name))
                    .col(integer_null(Gameday::GameNumber))
                    .col(integer(Gameday::SeasonId))
                    .col(timestamp_with_time_zone_null(Gameday::ScheduledDate))
                    .col(boolean(Gameday::Finished).default(false))
                    .col(boolean(Gameday::IsPrevious).default(false))
                    .col(boolean(Gameday::IsCurrent).default(false))
                    .col(boolean(Gameday::IsNext).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gameday_season_id")
                            .from(Gameday::Table, Gameday::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gameday::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gameday {
    Table,
    Id,
    Name,
    GameNumber,
    SeasonId,
    ScheduledDate,
    Finished,
    IsPrevious,
    IsCurrent,
    IsNext,
}
