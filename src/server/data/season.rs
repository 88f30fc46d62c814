use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{
        event::EventStatus,
        season::{SeasonStatsDto, SeasonType},
    },
    server::{
        error::AppError,
        model::season::{Season, UpdateSeasonParam},
    },
};

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a season as given; callers clear other active seasons first
    pub async fn create(
        &self,
        name: String,
        season_type: SeasonType,
        start_year: i32,
        end_year: i32,
        is_active: bool,
    ) -> Result<Season, AppError> {
        let entity = entity::season::ActiveModel {
            name: ActiveValue::Set(name),
            season_type: ActiveValue::Set(season_type.as_str().to_string()),
            start_year: ActiveValue::Set(start_year),
            end_year: ActiveValue::Set(end_year),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Season::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Season>, AppError> {
        entity::prelude::Season::find_by_id(id)
            .one(self.db)
            .await?
            .map(Season::from_entity)
            .transpose()
    }

    pub async fn find_active(&self) -> Result<Option<Season>, AppError> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::IsActive.eq(true))
            .one(self.db)
            .await?
            .map(Season::from_entity)
            .transpose()
    }

    /// Gets all seasons, most recent first
    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::StartYear)
            .order_by_desc(entity::season::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Season::from_entity)
            .collect()
    }

    /// Gets seasons starting or ending in the provided year
    pub async fn get_by_year(&self, year: i32) -> Result<Vec<Season>, AppError> {
        entity::prelude::Season::find()
            .filter(
                Condition::any()
                    .add(entity::season::Column::StartYear.eq(year))
                    .add(entity::season::Column::EndYear.eq(year)),
            )
            .order_by_desc(entity::season::Column::StartYear)
            .all(self.db)
            .await?
            .into_iter()
            .map(Season::from_entity)
            .collect()
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateSeasonParam,
    ) -> Result<Option<Season>, AppError> {
        let Some(existing) = entity::prelude::Season::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::season::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(season_type) = param.season_type {
            active.season_type = ActiveValue::Set(season_type.as_str().to_string());
        }
        if let Some(start_year) = param.start_year {
            active.start_year = ActiveValue::Set(start_year);
        }
        if let Some(end_year) = param.end_year {
            active.end_year = ActiveValue::Set(end_year);
        }

        let updated = active.update(self.db).await?;

        Season::from_entity(updated).map(Some)
    }

    /// Clears the active flag on every season
    ///
    /// Must run before a season is marked active, otherwise the single-active index
    /// rejects the write.
    pub async fn clear_active(&self) -> Result<(), AppError> {
        entity::prelude::Season::update_many()
            .col_expr(entity::season::Column::IsActive, Expr::value(false))
            .filter(entity::season::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the active flag of one season without touching the others
    pub async fn set_active_flag(&self, id: i32, is_active: bool) -> Result<(), AppError> {
        entity::prelude::Season::update_many()
            .col_expr(entity::season::Column::IsActive, Expr::value(is_active))
            .filter(entity::season::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Season::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_events(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::SeasonId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts gamedays, events, finished events and performances of a season
    pub async fn stats(&self, id: i32) -> Result<SeasonStatsDto, AppError> {
        let gamedays = entity::prelude::Gameday::find()
            .filter(entity::gameday::Column::SeasonId.eq(id))
            .count(self.db)
            .await?;
        let events = self.count_events(id).await?;
        let finished_events = entity::prelude::Event::find()
            .filter(entity::event::Column::SeasonId.eq(id))
            .filter(entity::event::Column::Status.eq(EventStatus::Finished.as_str()))
            .count(self.db)
            .await?;
        let performances = entity::prelude::Performance::find()
            .filter(entity::performance::Column::SeasonId.eq(id))
            .count(self.db)
            .await?;

        Ok(SeasonStatsDto {
            season_id: id,
            gamedays,
            events,
            finished_events,
            performances,
        })
    }
}
