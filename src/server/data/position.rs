use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::position::{CreatePositionParam, Position, UpdatePositionParam},
};

pub struct PositionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PositionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePositionParam) -> Result<Position, AppError> {
        let entity = entity::position::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            sport_id: ActiveValue::Set(param.sport_id),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Position::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Position>, AppError> {
        let entity = entity::prelude::Position::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Position::from_entity))
    }

    /// Finds a position by its code within one sport
    pub async fn find_by_code(
        &self,
        sport_id: i32,
        code: &str,
    ) -> Result<Option<Position>, AppError> {
        let entity = entity::prelude::Position::find()
            .filter(entity::position::Column::SportId.eq(sport_id))
            .filter(entity::position::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Position::from_entity))
    }

    /// Gets every position with the provided code across all sports
    pub async fn get_by_code(&self, code: &str) -> Result<Vec<Position>, AppError> {
        let entities = entity::prelude::Position::find()
            .filter(entity::position::Column::Code.eq(code))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Position::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Position>, AppError> {
        let entities = entity::prelude::Position::find()
            .order_by_asc(entity::position::Column::SportId)
            .order_by_asc(entity::position::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Position::from_entity).collect())
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Position>, AppError> {
        let entities = entity::prelude::Position::find()
            .filter(entity::position::Column::SportId.eq(sport_id))
            .order_by_asc(entity::position::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Position::from_entity).collect())
    }

    /// Updates the provided fields of a position
    ///
    /// # Returns
    /// - `Ok(Some(Position))` - The updated position
    /// - `Ok(None)` - No position exists with the provided ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePositionParam,
    ) -> Result<Option<Position>, AppError> {
        let Some(existing) = entity::prelude::Position::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::position::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(code) = param.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Position::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Position::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts active athletes playing the position
    pub async fn count_active_athletes(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Athlete::find()
            .filter(entity::athlete::Column::PositionId.eq(id))
            .filter(entity::athlete::Column::IsActive.eq(true))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
