use sea_orm_migration::prelude::*;

use super::{
    m20250901_000002_create_position_table::Position,
    m20250901_000003_create_discipline_table::Discipline,
    m20250901_000006_create_athlete_discipline_table::AthleteDiscipline,
    m20250901_000011_create_performance_table::Performance,
};

/// Composite uniqueness the service layer relies on, plus a partial index
/// allowing at most one active season.
#[derive(DeriveMigrationName)]
pub struct Migration;

const ONE_ACTIVE_SEASON: &str = "idx_season_single_active";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_position_code_sport")
                    .table(Position::Table)
                    .col(Position::Code)
                    .col(Position::SportId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discipline_code_sport")
                    .table(Discipline::Table)
                    .col(Discipline::Code)
                    .col(Discipline::SportId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_athlete_discipline_pair")
                    .table(AthleteDiscipline::Table)
                    .col(AthleteDiscipline::AthleteId)
                    .col(AthleteDiscipline::DisciplineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_performance_athlete_event_discipline")
                    .table(Performance::Table)
                    .col(Performance::AthleteId)
                    .col(Performance::EventId)
                    .col(Performance::DisciplineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {ONE_ACTIVE_SEASON} ON season (is_active) WHERE is_active"
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP INDEX IF EXISTS {ONE_ACTIVE_SEASON}"))
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_performance_athlete_event_discipline")
                    .table(Performance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_athlete_discipline_pair")
                    .table(AthleteDiscipline::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_discipline_code_sport")
                    .table(Discipline::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_position_code_sport")
                    .table(Position::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
