use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_position_table::Position, m20250901_000004_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Athlete::Table)
                    .if_not_exists()
                    .col(pk_auto(Athlete::Id))
                    .col(string_uniq(Athlete::Code))
                    .col(string(Athlete::FirstName))
                    .col(string(Athlete::LastName))
                    .col(integer_null(Athlete::TeamId))
                    .col(integer_null(Athlete::PositionId))
                    .col(date(Athlete::DateOfBirth))
                    .col(string(Athlete::Nationality))
                    .col(string(Athlete::Gender))
                    .col(double(Athlete::Height))
                    .col(double(Athlete::Weight))
                    .col(text_null(Athlete::Bio))
                    .col(boolean(Athlete::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Athlete::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Athlete::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_athlete_team_id")
                            .from(Athlete::Table, Athlete::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_athlete_position_id")
                            .from(Athlete::Table, Athlete::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Athlete::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Athlete {
    Table,
    Id,
    Code,
    FirstName,
    LastName,
    TeamId,
    PositionId,
    DateOfBirth,
    Nationality,
    Gender,
    Height,
    Weight,
    Bio,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
