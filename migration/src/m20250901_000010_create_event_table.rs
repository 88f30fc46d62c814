use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_sport_table::Sport, m20250901_000007_create_season_table::Season,
    m20250901_000008_create_gameday_table::Gameday, m20250901_000009_create_venue_table::Venue,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(string_uniq(Event::Code))
                    .col(integer(Event::SportId))
                    .col(integer(Event::Year))
                    .col(integer(Event::SeasonId))
                    .col(integer(Event::GamedayId))
                    .col(integer_null(Event::VenueId))
                    .col(string_null(Event::Gender))
                    .col(timestamp_with_time_zone(Event::StartDate))
                    .col(timestamp_with_time_zone_null(Event::EndDate))
                    .col(string_null(Event::Location))
                    .col(text_null(Event::Description))
                    .col(boolean(Event::IsActive).default(true))
                    .col(string(Event::Status).default("SCHEDULED"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_sport_id")
                            .from(Event::Table, Event::SportId)
                            .to(Sport::Table, Sport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_season_id")
                            .from(Event::Table, Event::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_gameday_id")
                            .from(Event::Table, Event::GamedayId)
                            .to(Gameday::Table, Gameday::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_venue_id")
                            .from(Event::Table, Event::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    Code,
    SportId,
    Year,
    SeasonId,
    GamedayId,
    VenueId,
    Gender,
    StartDate,
    EndDate,
    Location,
    Description,
    IsActive,
    Status,
}
