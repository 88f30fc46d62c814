//! Position factory for team-sport positions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test positions.
pub struct PositionFactory<'a> {
    db: &'a DatabaseConnection,
    sport_id: i32,
    name: String,
    code: String,
    description: Option<String>,
}

impl<'a> PositionFactory<'a> {
    /// Creates a new PositionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Position {id}"`
    /// - code: `"POS{id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, sport_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            sport_id,
            name: format!("Position {}", id),
            code: format!("POS{}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::position::Model, DbErr> {
        entity::position::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            sport_id: ActiveValue::Set(self.sport_id),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a position with default values for the given sport.
pub async fn create_position(
    db: &DatabaseConnection,
    sport_id: i32,
) -> Result<entity::position::Model, DbErr> {
    PositionFactory::new(db, sport_id).build().await
}
