//! Event factory for creating test event entities.
//!
//! Events require a sport, a season and a gameday. Use
//! `helpers::create_event_with_dependencies` when the test does not care about them.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, sport.id, season.id, gameday.id)
///     .status("LIVE")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    sport_id: i32,
    season_id: i32,
    gameday_id: i32,
    venue_id: Option<i32>,
    name: String,
    code: String,
    start_date: DateTime<Utc>,
    status: String,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - code: `"EVT{id}"`
    /// - start_date: now
    /// - status: `"LIVE"` so performances can be recorded against it
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sport_id` - Sport the event is held for
    /// - `season_id` - Season the event belongs to
    /// - `gameday_id` - Gameday the event belongs to
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, sport_id: i32, season_id: i32, gameday_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            sport_id,
            season_id,
            gameday_id,
            venue_id: None,
            name: format!("Event {}", id),
            code: format!("EVT{}", id),
            start_date: Utc::now(),
            status: "LIVE".to_string(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn venue(mut self, venue_id: Option<i32>) -> Self {
        self.venue_id = venue_id;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the status (an `EventStatus` name such as `SCHEDULED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            sport_id: ActiveValue::Set(self.sport_id),
            year: ActiveValue::Set(self.start_date.year()),
            season_id: ActiveValue::Set(self.season_id),
            gameday_id: ActiveValue::Set(self.gameday_id),
            venue_id: ActiveValue::Set(self.venue_id),
            gender: ActiveValue::Set(None),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a LIVE event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    sport_id: i32,
    season_id: i32,
    gameday_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, sport_id, season_id, gameday_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::{
        gameday::create_gameday, season::create_season, sport::create_individual_sport,
    };

    #[tokio::test]
    async fn creates_event_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_event_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sport = create_individual_sport(db).await?;
        let season = create_season(db).await?;
        let gameday = create_gameday(db, season.id).await?;
        let event = create_event(db, sport.id, season.id, gameday.id).await?;

        assert_eq!(event.sport_id, sport.id);
        assert_eq!(event.season_id, season.id);
        assert_eq!(event.gameday_id, gameday.id);
        assert_eq!(event.status, "LIVE");
        assert!(event.is_active);

        Ok(())
    }
}
