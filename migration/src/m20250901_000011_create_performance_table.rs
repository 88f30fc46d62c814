use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000003_create_discipline_table::Discipline,
    m20250901_000005_create_athlete_table::Athlete,
    m20250901_000007_create_season_table::Season, m20250901_000010_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Performance::Table)
                    .if_not_exists()
                    .col(pk_auto(Performance::Id))
                    .col(integer(Performance::AthleteId))
                    .col(integer(Performance::EventId))
                    .col(integer_null(Performance::DisciplineId))
                    .col(integer(Performance::SeasonId))
                    .col(timestamp_with_time_zone(Performance::Date))
                    .col(text_null(Performance::Notes))
                    .col(integer_null(Performance::Position))
                    .col(double_null(Performance::Points))
                    .col(double_null(Performance::Time))
                    .col(double_null(Performance::Distance))
                    .col(double_null(Performance::Height))
                    .col(integer_null(Performance::MinutesPlayed))
                    .col(integer_null(Performance::Assists))
                    .col(integer_null(Performance::GoalsScored))
                    .col(integer_null(Performance::GoalsConceded))
                    .col(integer_null(Performance::YellowCards))
                    .col(integer_null(Performance::RedCards))
                    .col(integer_null(Performance::Saves))
                    .col(integer_null(Performance::TwoPoints))
                    .col(integer_null(Performance::ThreePoints))
                    .col(integer_null(Performance::FreeThrows))
                    .col(integer_null(Performance::FieldGoals))
                    .col(integer_null(Performance::Rebounds))
                    .col(integer_null(Performance::Steals))
                    .col(integer_null(Performance::Blocks))
                    .col(integer_null(Performance::Turnovers))
                    .col(integer_null(Performance::Wins))
                    .col(integer_null(Performance::Losses))
                    .col(integer_null(Performance::Pins))
                    .col(integer_null(Performance::TechnicalFalls))
                    .col(integer_null(Performance::Decisions))
                    .col(integer_null(Performance::Rounds))
                    .col(integer_null(Performance::Knockouts))
                    .col(integer_null(Performance::Knockdowns))
                    .col(integer_null(Performance::PunchesLanded))
                    .col(integer_null(Performance::PunchesThrown))
                    .col(boolean(Performance::IsPersonalBest).default(false))
                    .col(boolean(Performance::IsSeasonBest).default(false))
                    .col(
                        timestamp_with_time_zone(Performance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_athlete_id")
                            .from(Performance::Table, Performance::AthleteId)
                            .to(Athlete::Table, Athlete::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_event_id")
                            .from(Performance::Table, Performance::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_discipline_id")
                            .from(Performance::Table, Performance::DisciplineId)
                            .to(Discipline::Table, Discipline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_season_id")
                            .from(Performance::Table, Performance::SeasonId)
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
            .drop_table(Table::drop().table(Performance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Performance {
    Table,
    Id,
    AthleteId,
    EventId,
    DisciplineId,
    SeasonId,
    Date,
    Notes,
    Position,
    Points,
    Time,
    Distance,
    Height,
    MinutesPlayed,
    Assists,
    GoalsScored,
    GoalsConceded,
    YellowCards,
    RedCards,
    Saves,
    TwoPoints,
    ThreePoints,
    FreeThrows,
    FieldGoals,
    Rebounds,
    Steals,
    Blocks,
    Turnovers,
    Wins,
    Losses,
    Pins,
    TechnicalFalls,
    Decisions,
    Rounds,
    Knockouts,
    Knockdowns,
    PunchesLanded,
    PunchesThrown,
    IsPersonalBest,
    IsSeasonBest,
    CreatedAt,
}
