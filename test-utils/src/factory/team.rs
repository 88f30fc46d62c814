//! Team factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    sport_id: i32,
    code: String,
    name: String,
}

impl<'a> TeamFactory<'a> {
    /// Defaults: code `"TEAM{id}"`, name `"Team {id}"`.
    pub fn new(db: &'a DatabaseConnection, sport_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            sport_id,
            code: format!("TEAM{}", id),
            name: format!("Team {}", id),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            sport_id: ActiveValue::Set(self.sport_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given sport.
pub async fn create_team(
    db: &DatabaseConnection,
    sport_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, sport_id).build().await
}
