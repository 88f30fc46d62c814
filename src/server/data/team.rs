use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::team::{CreateTeamParam, Team, UpdateTeamParam},
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        let entity = entity::team::ActiveModel {
            code: ActiveValue::Set(param.code),
            name: ActiveValue::Set(param.name),
            sport_id: ActiveValue::Set(param.sport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, AppError> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Team>, AppError> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Team>, AppError> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::SportId.eq(sport_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Updates the provided fields of a team
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The updated team
    /// - `Ok(None)` - No team exists with the provided ID
    pub async fn update(&self, id: i32, param: UpdateTeamParam) -> Result<Option<Team>, AppError> {
        let Some(existing) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        if let Some(code) = param.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Team::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_active_athletes(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Athlete::find()
            .filter(entity::athlete::Column::TeamId.eq(id))
            .filter(entity::athlete::Column::IsActive.eq(true))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
