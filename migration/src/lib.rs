pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_sport_table;
mod m20250901_000002_create_position_table;
mod m20250901_000003_create_discipline_table;
mod m20250901_000004_create_team_table;
mod m20250901_000005_create_athlete_table;
mod m20250901_000006_create_athlete_discipline_table;
mod m20250901_000007_create_season_table;
mod m20250901_000008_create_gameday_table;
mod m20250901_000009_create_venue_table;
mod m20250901_000010_create_event_table;
mod m20250901_000011_create_performance_table;
mod m20250901_000012_create_university_table;
mod m20250902_000013_add_uniqueness_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_sport_table::Migration),
            Box::new(m20250901_000002_create_position_table::Migration),
            Box::new(m20250901_000003_create_discipline_table::Migration),
            Box::new(m20250901_000004_create_team_table::Migration),
            Box::new(m20250901_000005_create_athlete_table::Migration),
            Box::new(m20250901_000006_create_athlete_discipline_table::Migration),
            Box::new(m20250901_000007_create_season_table::Migration),
            Box::new(m20250901_000008_create_gameday_table::Migration),
            Box::new(m20250901_000009_create_venue_table::Migration),
            Box::new(m20250901_000010_create_event_table::Migration),
            Box::new(m20250901_000011_create_performance_table::Migration),
            Box::new(m20250901_000012_create_university_table::Migration),
            Box::new(m20250902_000013_add_uniqueness_indexes::Migration),
        ]
    }
}
