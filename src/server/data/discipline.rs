//! Discipline data repository for database operations
//!
//! Besides discipline CRUD, the repository manages the athlete ↔ discipline links that
//! carry each athlete's current rank.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::discipline::{CreateDisciplineParam, Discipline, UpdateDisciplineParam},
};

pub struct DisciplineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DisciplineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDisciplineParam) -> Result<Discipline, AppError> {
        let entity = entity::discipline::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            sport_id: ActiveValue::Set(param.sport_id),
            description: ActiveValue::Set(param.description),
            unit: ActiveValue::Set(param.unit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Discipline::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Discipline>, AppError> {
        let entity = entity::prelude::Discipline::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Discipline::from_entity))
    }

    /// Finds a discipline by its code within one sport
    pub async fn find_by_code(
        &self,
        sport_id: i32,
        code: &str,
    ) -> Result<Option<Discipline>, AppError> {
        let entity = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::SportId.eq(sport_id))
            .filter(entity::discipline::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Discipline::from_entity))
    }

    /// Gets every discipline with the provided code across all sports
    pub async fn get_by_code(&self, code: &str) -> Result<Vec<Discipline>, AppError> {
        let entities = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::Code.eq(code))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Discipline::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Discipline>, AppError> {
        let entities = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Discipline::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Discipline>, AppError> {
        let entities = entity::prelude::Discipline::find()
            .order_by_asc(entity::discipline::Column::SportId)
            .order_by_asc(entity::discipline::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Discipline::from_entity).collect())
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Discipline>, AppError> {
        let entities = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::SportId.eq(sport_id))
            .order_by_asc(entity::discipline::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Discipline::from_entity).collect())
    }

    /// Updates the provided fields of a discipline
    ///
    /// # Returns
    /// - `Ok(Some(Discipline))` - The updated discipline
    /// - `Ok(None)` - No discipline exists with the provided ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateDisciplineParam,
    ) -> Result<Option<Discipline>, AppError> {
        let Some(existing) = entity::prelude::Discipline::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::discipline::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(unit) = param.unit {
            active.unit = ActiveValue::Set(Some(unit));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Discipline::from_entity(updated)))
    }

    /// Deletes a discipline together with its athlete links
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::AthleteDiscipline::delete_many()
            .filter(entity::athlete_discipline::Column::DisciplineId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Discipline::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_performances(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Performance::find()
            .filter(entity::performance::Column::DisciplineId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    pub async fn find_link(
        &self,
        athlete_id: i32,
        discipline_id: i32,
    ) -> Result<Option<entity::athlete_discipline::Model>, AppError> {
        let link = entity::prelude::AthleteDiscipline::find()
            .filter(entity::athlete_discipline::Column::AthleteId.eq(athlete_id))
            .filter(entity::athlete_discipline::Column::DisciplineId.eq(discipline_id))
            .one(self.db)
            .await?;

        Ok(link)
    }

    /// Links an athlete to a discipline with an optional current rank
    pub async fn create_link(
        &self,
        athlete_id: i32,
        discipline_id: i32,
        current_rank: Option<i32>,
    ) -> Result<entity::athlete_discipline::Model, AppError> {
        let link = entity::athlete_discipline::ActiveModel {
            athlete_id: ActiveValue::Set(athlete_id),
            discipline_id: ActiveValue::Set(discipline_id),
            current_rank: ActiveValue::Set(current_rank),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(link)
    }

    /// Sets the current rank of an existing link
    ///
    /// # Returns
    /// - `Ok(Some(link))` - The updated link
    /// - `Ok(None)` - The athlete is not linked to the discipline
    pub async fn update_link_rank(
        &self,
        athlete_id: i32,
        discipline_id: i32,
        current_rank: i32,
    ) -> Result<Option<entity::athlete_discipline::Model>, AppError> {
        let Some(link) = self.find_link(athlete_id, discipline_id).await? else {
            return Ok(None);
        };

        let mut active: entity::athlete_discipline::ActiveModel = link.into();
        active.current_rank = ActiveValue::Set(Some(current_rank));

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete_link(&self, athlete_id: i32, discipline_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::AthleteDiscipline::delete_many()
            .filter(entity::athlete_discipline::Column::AthleteId.eq(athlete_id))
            .filter(entity::athlete_discipline::Column::DisciplineId.eq(discipline_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the athlete links of a discipline ordered by rank, unranked athletes last
    pub async fn get_links(
        &self,
        discipline_id: i32,
    ) -> Result<Vec<entity::athlete_discipline::Model>, AppError> {
        let mut links = entity::prelude::AthleteDiscipline::find()
            .filter(entity::athlete_discipline::Column::DisciplineId.eq(discipline_id))
            .order_by_asc(entity::athlete_discipline::Column::Id)
            .all(self.db)
            .await?;

        links.sort_by_key(|link| (link.current_rank.is_none(), link.current_rank));

        Ok(links)
    }
}
