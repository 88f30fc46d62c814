//! Gameday factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gamedays. All state flags default to `false`.
pub struct GamedayFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    name: String,
    is_current: bool,
    is_next: bool,
    is_previous: bool,
    finished: bool,
}

impl<'a> GamedayFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            name: format!("Gameday {}", id),
            is_current: false,
            is_next: false,
            is_previous: false,
            finished: false,
        }
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    pub fn next(mut self, is_next: bool) -> Self {
        self.is_next = is_next;
        self
    }

    pub fn previous(mut self, is_previous: bool) -> Self {
        self.is_previous = is_previous;
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    pub async fn build(self) -> Result<entity::gameday::Model, DbErr> {
        entity::gameday::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            game_number: ActiveValue::Set(None),
            season_id: ActiveValue::Set(self.season_id),
            scheduled_date: ActiveValue::Set(None),
            finished: ActiveValue::Set(self.finished),
            is_previous: ActiveValue::Set(self.is_previous),
            is_current: ActiveValue::Set(self.is_current),
            is_next: ActiveValue::Set(self.is_next),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gameday with every flag cleared.
pub async fn create_gameday(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::gameday::Model, DbErr> {
    GamedayFactory::new(db, season_id).build().await
}
