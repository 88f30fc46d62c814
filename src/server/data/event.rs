use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    model::event::{EventStatus, UpdateEventDto},
    server::{
        error::AppError,
        model::event::{CreateEventParam, Event},
    },
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            sport_id: ActiveValue::Set(param.sport_id),
            year: ActiveValue::Set(param.year),
            season_id: ActiveValue::Set(param.season_id),
            gameday_id: ActiveValue::Set(param.gameday_id),
            venue_id: ActiveValue::Set(param.venue_id),
            gender: ActiveValue::Set(param.gender.map(|g| g.as_str().to_string())),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            location: ActiveValue::Set(param.location),
            description: ActiveValue::Set(param.description),
            is_active: ActiveValue::Set(true),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Event>, AppError> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Code.eq(code))
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    /// Gets all events, latest start first
    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        self.get_where(None, None, None, None).await
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Event>, AppError> {
        self.get_where(Some(sport_id), None, None, None).await
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Event>, AppError> {
        self.get_where(None, Some(season_id), None, None).await
    }

    pub async fn get_by_gameday(&self, gameday_id: i32) -> Result<Vec<Event>, AppError> {
        self.get_where(None, None, Some(gameday_id), None).await
    }

    pub async fn get_by_status(&self, status: EventStatus) -> Result<Vec<Event>, AppError> {
        self.get_where(None, None, None, Some(status)).await
    }

    /// Gets up to `limit` scheduled events, soonest first
    pub async fn get_upcoming(&self, limit: u64) -> Result<Vec<Event>, AppError> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(EventStatus::Scheduled.as_str()))
            .order_by_asc(entity::event::Column::StartDate)
            .order_by_asc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    pub async fn update(&self, id: i32, dto: UpdateEventDto) -> Result<Option<Event>, AppError> {
        let Some(existing) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(venue_id) = dto.venue_id {
            active.venue_id = ActiveValue::Set(Some(venue_id));
        }
        if let Some(gender) = dto.gender {
            active.gender = ActiveValue::Set(Some(gender.as_str().to_string()));
        }
        if let Some(start_date) = dto.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = dto.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(location) = dto.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(description) = dto.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = dto.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let updated = active.update(self.db).await?;

        Event::from_entity(updated).map(Some)
    }

    pub async fn set_status(&self, id: i32, status: EventStatus) -> Result<Option<Event>, AppError> {
        let Some(existing) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active.update(self.db).await?;

        Event::from_entity(updated).map(Some)
    }

    /// Deletes an event and every performance recorded at it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::Performance::delete_many()
            .filter(entity::performance::Column::EventId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn get_where(
        &self,
        sport_id: Option<i32>,
        season_id: Option<i32>,
        gameday_id: Option<i32>,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, AppError> {
        let mut query = entity::prelude::Event::find();
        if let Some(sport_id) = sport_id {
            query = query.filter(entity::event::Column::SportId.eq(sport_id));
        }
        if let Some(season_id) = season_id {
            query = query.filter(entity::event::Column::SeasonId.eq(season_id));
        }
        if let Some(gameday_id) = gameday_id {
            query = query.filter(entity::event::Column::GamedayId.eq(gameday_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::event::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::event::Column::StartDate)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }
}
