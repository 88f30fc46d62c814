//! Sport data repository for database operations
//!
//! Provides the `SportRepository` for managing sports in the database along with the
//! dependency counts used to guard deletion and to build sport statistics.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::sport::SportType,
    server::{
        error::AppError,
        model::sport::{Sport, SportDependents},
    },
};

/// Repository providing database operations for sport management.
pub struct SportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SportRepository<'a, C> {
    /// Creates a new SportRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new sport
    ///
    /// # Returns
    /// - `Ok(Sport)` - The created sport as a domain model
    /// - `Err(AppError::DbErr)` - Database error during insert, including a duplicate name
    pub async fn create(&self, name: SportType, is_team_sport: bool) -> Result<Sport, AppError> {
        let entity = entity::sport::ActiveModel {
            name: ActiveValue::Set(name.as_str().to_string()),
            is_team_sport: ActiveValue::Set(is_team_sport),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Sport::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sport>, AppError> {
        entity::prelude::Sport::find_by_id(id)
            .one(self.db)
            .await?
            .map(Sport::from_entity)
            .transpose()
    }

    pub async fn find_by_name(&self, name: SportType) -> Result<Option<Sport>, AppError> {
        entity::prelude::Sport::find()
            .filter(entity::sport::Column::Name.eq(name.as_str()))
            .one(self.db)
            .await?
            .map(Sport::from_entity)
            .transpose()
    }

    /// Gets all sports ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Sport>, AppError> {
        entity::prelude::Sport::find()
            .order_by_asc(entity::sport::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Sport::from_entity)
            .collect()
    }

    /// Updates the provided fields of a sport
    ///
    /// # Returns
    /// - `Ok(Some(Sport))` - The updated sport
    /// - `Ok(None)` - No sport exists with the provided ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        name: Option<SportType>,
        is_team_sport: Option<bool>,
    ) -> Result<Option<Sport>, AppError> {
        let Some(existing) = entity::prelude::Sport::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::sport::ActiveModel = existing.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name.as_str().to_string());
        }
        if let Some(is_team_sport) = is_team_sport {
            active.is_team_sport = ActiveValue::Set(is_team_sport);
        }

        let updated = active.update(self.db).await?;

        Sport::from_entity(updated).map(Some)
    }

    /// Deletes the sport of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The sport was deleted
    /// - `Ok(false)` - No sport exists with the provided ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Sport::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the records referencing a sport
    pub async fn count_dependents(&self, id: i32) -> Result<SportDependents, AppError> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::SportId.eq(id))
            .count(self.db)
            .await?;
        let positions = entity::prelude::Position::find()
            .filter(entity::position::Column::SportId.eq(id))
            .count(self.db)
            .await?;
        let disciplines = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::SportId.eq(id))
            .count(self.db)
            .await?;
        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::SportId.eq(id))
            .count(self.db)
            .await?;

        Ok(SportDependents {
            teams,
            positions,
            disciplines,
            events,
        })
    }

    /// Counts active athletes on one of the sport's teams or registered for one of its
    /// disciplines
    pub async fn count_active_athletes(&self, id: i32) -> Result<u64, AppError> {
        let team_ids: Vec<i32> = entity::prelude::Team::find()
            .filter(entity::team::Column::SportId.eq(id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|team| team.id)
            .collect();

        let discipline_ids: Vec<i32> = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::SportId.eq(id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|discipline| discipline.id)
            .collect();

        let linked_athlete_ids: Vec<i32> = entity::prelude::AthleteDiscipline::find()
            .filter(entity::athlete_discipline::Column::DisciplineId.is_in(discipline_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.athlete_id)
            .collect();

        let count = entity::prelude::Athlete::find()
            .filter(entity::athlete::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::athlete::Column::TeamId.is_in(team_ids))
                    .add(entity::athlete::Column::Id.is_in(linked_athlete_ids)),
            )
            .count(self.db)
            .await?;

        Ok(count)
    }
}
