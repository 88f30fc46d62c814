//! Season factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    season_type: String,
    start_year: i32,
    end_year: i32,
    is_active: bool,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"`
    /// - season_type: `"REGULAR"`
    /// - start_year / end_year: `2025` / `2026`
    /// - is_active: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            season_type: "REGULAR".to_string(),
            start_year: 2025,
            end_year: 2026,
            is_active: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            season_type: ActiveValue::Set(self.season_type),
            start_year: ActiveValue::Set(self.start_year),
            end_year: ActiveValue::Set(self.end_year),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactive 2025/2026 season.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
