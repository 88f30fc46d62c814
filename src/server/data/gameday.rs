use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::gameday::{CreateGamedayParam, Gameday, GamedaySlot},
};

pub struct GamedayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GamedayRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGamedayParam) -> Result<Gameday, AppError> {
        let entity = entity::gameday::ActiveModel {
            name: ActiveValue::Set(param.name),
            game_number: ActiveValue::Set(param.game_number),
            season_id: ActiveValue::Set(param.season_id),
            scheduled_date: ActiveValue::Set(param.scheduled_date),
            finished: ActiveValue::Set(false),
            is_previous: ActiveValue::Set(false),
            is_current: ActiveValue::Set(param.is_current),
            is_next: ActiveValue::Set(param.is_next),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Gameday::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gameday>, AppError> {
        let entity = entity::prelude::Gameday::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Gameday::from_entity))
    }

    /// Gets all gamedays ordered by season then game number
    pub async fn get_all(&self) -> Result<Vec<Gameday>, AppError> {
        let entities = entity::prelude::Gameday::find()
            .order_by_asc(entity::gameday::Column::SeasonId)
            .order_by_asc(entity::gameday::Column::GameNumber)
            .order_by_asc(entity::gameday::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gameday::from_entity).collect())
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Gameday>, AppError> {
        let entities = entity::prelude::Gameday::find()
            .filter(entity::gameday::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::gameday::Column::GameNumber)
            .order_by_asc(entity::gameday::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gameday::from_entity).collect())
    }

    /// Finds the gameday holding the flag of the provided slot, optionally within a season
    ///
    /// When several rows carry the `next` flag the lowest game number wins; for `previous`
    /// the most recently finished one does.
    pub async fn find_slot(
        &self,
        slot: GamedaySlot,
        season_id: Option<i32>,
    ) -> Result<Option<Gameday>, AppError> {
        let mut query = entity::prelude::Gameday::find();
        if let Some(season_id) = season_id {
            query = query.filter(entity::gameday::Column::SeasonId.eq(season_id));
        }

        query = match slot {
            GamedaySlot::Current => query
                .filter(entity::gameday::Column::IsCurrent.eq(true))
                .order_by_desc(entity::gameday::Column::Id),
            GamedaySlot::Next => query
                .filter(entity::gameday::Column::IsNext.eq(true))
                .order_by_asc(entity::gameday::Column::GameNumber)
                .order_by_asc(entity::gameday::Column::Id),
            GamedaySlot::Previous => query
                .filter(entity::gameday::Column::IsPrevious.eq(true))
                .order_by_desc(entity::gameday::Column::GameNumber)
                .order_by_desc(entity::gameday::Column::Id),
        };

        let entity = query.one(self.db).await?;

        Ok(entity.map(Gameday::from_entity))
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        game_number: Option<i32>,
        scheduled_date: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<Option<Gameday>, AppError> {
        let Some(existing) = entity::prelude::Gameday::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::gameday::ActiveModel = existing.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(game_number) = game_number {
            active.game_number = ActiveValue::Set(Some(game_number));
        }
        if let Some(scheduled_date) = scheduled_date {
            active.scheduled_date = ActiveValue::Set(Some(scheduled_date));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Gameday::from_entity(updated)))
    }

    /// Clears `is_current` on every gameday of a season
    pub async fn clear_current(&self, season_id: i32) -> Result<(), AppError> {
        entity::prelude::Gameday::update_many()
            .col_expr(entity::gameday::Column::IsCurrent, Expr::value(false))
            .filter(entity::gameday::Column::SeasonId.eq(season_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears `is_previous` on every gameday of a season
    pub async fn clear_previous(&self, season_id: i32) -> Result<(), AppError> {
        entity::prelude::Gameday::update_many()
            .col_expr(entity::gameday::Column::IsPrevious, Expr::value(false))
            .filter(entity::gameday::Column::SeasonId.eq(season_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Overwrites the state flags of one gameday
    pub async fn set_flags(
        &self,
        id: i32,
        finished: bool,
        is_previous: bool,
        is_current: bool,
        is_next: bool,
    ) -> Result<Option<Gameday>, AppError> {
        let Some(existing) = entity::prelude::Gameday::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::gameday::ActiveModel = existing.into();
        active.finished = ActiveValue::Set(finished);
        active.is_previous = ActiveValue::Set(is_previous);
        active.is_current = ActiveValue::Set(is_current);
        active.is_next = ActiveValue::Set(is_next);

        let updated = active.update(self.db).await?;

        Ok(Some(Gameday::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Gameday::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_events(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::GamedayId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
