//! Athlete data repository for database operations
//!
//! Provides the `AthleteRepository` for managing athletes in the database. Every method
//! returning athletes hydrates them with their team code, position code and discipline
//! links in a fixed number of batched queries, so listing pages never issue per-row
//! lookups.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::athlete::{
        Athlete, AthleteDiscipline, AthleteFilter, CreateAthleteParam, UpdateAthleteParam,
    },
};

/// Repository providing database operations for athlete management.
pub struct AthleteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AthleteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new athlete
    ///
    /// # Returns
    /// - `Ok(Athlete)` - The created athlete with its team and position codes resolved
    /// - `Err(AppError::DbErr)` - Database error during insert, including a duplicate code
    pub async fn create(&self, param: CreateAthleteParam) -> Result<Athlete, AppError> {
        let now = Utc::now();
        let entity = entity::athlete::ActiveModel {
            code: ActiveValue::Set(param.code),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            team_id: ActiveValue::Set(param.team_id),
            position_id: ActiveValue::Set(param.position_id),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            nationality: ActiveValue::Set(param.nationality),
            gender: ActiveValue::Set(param.gender.as_str().to_string()),
            height: ActiveValue::Set(param.height),
            weight: ActiveValue::Set(param.weight),
            bio: ActiveValue::Set(param.bio),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate_one(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Athlete>, AppError> {
        match entity::prelude::Athlete::find_by_id(id).one(self.db).await? {
            Some(entity) => self.hydrate_one(entity).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Athlete>, AppError> {
        let entity = entity::prelude::Athlete::find()
            .filter(entity::athlete::Column::Code.eq(code))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => self.hydrate_one(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Gets a page of athletes matching the filter, ordered by last name then first name
    ///
    /// # Arguments
    /// - `filter` - Filters combined with AND
    /// - `page` - 1-based page number
    /// - `limit` - Number of athletes per page
    ///
    /// # Returns
    /// - `Ok((athletes, total))` - The requested page and the total number of matches
    pub async fn get_paginated(
        &self,
        filter: &AthleteFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Athlete>, u64), AppError> {
        let condition = self.filter_condition(filter).await?;

        let paginator = ordered(entity::prelude::Athlete::find().filter(condition))
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((self.hydrate(entities).await?, total))
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Athlete>, AppError> {
        self.get_where(Condition::all().add(entity::athlete::Column::TeamId.eq(team_id)))
            .await
    }

    /// Gets active athletes of a team, used for the team roster
    pub async fn get_active_by_team(&self, team_id: i32) -> Result<Vec<Athlete>, AppError> {
        self.get_where(
            Condition::all()
                .add(entity::athlete::Column::TeamId.eq(team_id))
                .add(entity::athlete::Column::IsActive.eq(true)),
        )
        .await
    }

    pub async fn get_by_position_ids(&self, ids: Vec<i32>) -> Result<Vec<Athlete>, AppError> {
        self.get_where(Condition::all().add(entity::athlete::Column::PositionId.is_in(ids)))
            .await
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Athlete>, AppError> {
        self.get_where(Condition::all().add(entity::athlete::Column::Id.is_in(ids)))
            .await
    }

    /// Gets athletes on one of the sport's teams or linked to one of its disciplines
    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Athlete>, AppError> {
        let condition = self.sport_condition(sport_id).await?;

        self.get_where(condition).await
    }

    /// Gets athletes linked to any of the provided disciplines
    pub async fn get_by_discipline_ids(
        &self,
        discipline_ids: Vec<i32>,
    ) -> Result<Vec<Athlete>, AppError> {
        let athlete_ids = self.linked_athlete_ids(discipline_ids).await?;

        self.get_by_ids(athlete_ids).await
    }

    /// Updates the provided fields of an athlete and bumps `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(Athlete))` - The updated athlete
    /// - `Ok(None)` - No athlete exists with the provided ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAthleteParam,
    ) -> Result<Option<Athlete>, AppError> {
        let Some(existing) = entity::prelude::Athlete::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::athlete::ActiveModel = existing.into();
        if let Some(code) = param.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(team_id) = param.team_id {
            active.team_id = ActiveValue::Set(Some(team_id));
        }
        if let Some(position_id) = param.position_id {
            active.position_id = ActiveValue::Set(Some(position_id));
        }
        if let Some(date_of_birth) = param.date_of_birth {
            active.date_of_birth = ActiveValue::Set(date_of_birth);
        }
        if let Some(nationality) = param.nationality {
            active.nationality = ActiveValue::Set(nationality);
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(gender.as_str().to_string());
        }
        if let Some(height) = param.height {
            active.height = ActiveValue::Set(height);
        }
        if let Some(weight) = param.weight {
            active.weight = ActiveValue::Set(weight);
        }
        if let Some(bio) = param.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        self.hydrate_one(updated).await.map(Some)
    }

    /// Detaches an athlete from its team and position
    ///
    /// # Returns
    /// - `Ok(Some(Athlete))` - The detached athlete
    /// - `Ok(None)` - No athlete exists with the provided ID
    pub async fn clear_team(&self, id: i32) -> Result<Option<Athlete>, AppError> {
        let Some(existing) = entity::prelude::Athlete::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::athlete::ActiveModel = existing.into();
        active.team_id = ActiveValue::Set(None);
        active.position_id = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        self.hydrate_one(updated).await.map(Some)
    }

    /// Marks an athlete inactive instead of deleting it
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let updated = self
            .update(
                id,
                UpdateAthleteParam {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        Ok(updated.is_some())
    }

    /// Deletes an athlete and its discipline links
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::AthleteDiscipline::delete_many()
            .filter(entity::athlete_discipline::Column::AthleteId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Athlete::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_performances(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Performance::find()
            .filter(entity::performance::Column::AthleteId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    async fn get_where(&self, condition: Condition) -> Result<Vec<Athlete>, AppError> {
        let entities = ordered(entity::prelude::Athlete::find().filter(condition))
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Translates the listing filter into a query condition, resolving codes to IDs
    async fn filter_condition(&self, filter: &AthleteFilter) -> Result<Condition, AppError> {
        let mut condition = Condition::all();

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(entity::athlete::Column::Code.contains(search))
                    .add(entity::athlete::Column::FirstName.contains(search))
                    .add(entity::athlete::Column::LastName.contains(search)),
            );
        }

        if let Some(code) = &filter.team_code {
            let team_ids: Vec<i32> = entity::prelude::Team::find()
                .filter(entity::team::Column::Code.eq(code.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|team| team.id)
                .collect();
            condition = condition.add(entity::athlete::Column::TeamId.is_in(team_ids));
        }

        if let Some(code) = &filter.position_code {
            let position_ids: Vec<i32> = entity::prelude::Position::find()
                .filter(entity::position::Column::Code.eq(code.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|position| position.id)
                .collect();
            condition = condition.add(entity::athlete::Column::PositionId.is_in(position_ids));
        }

        if let Some(sport_type) = filter.sport_type {
            let sport = entity::prelude::Sport::find()
                .filter(entity::sport::Column::Name.eq(sport_type.as_str()))
                .one(self.db)
                .await?;
            condition = match sport {
                Some(sport) => condition.add(self.sport_condition(sport.id).await?),
                None => condition.add(entity::athlete::Column::Id.is_in(Vec::<i32>::new())),
            };
        }

        if let Some(gender) = filter.gender {
            condition = condition.add(entity::athlete::Column::Gender.eq(gender.as_str()));
        }

        if let Some(is_active) = filter.is_active {
            condition = condition.add(entity::athlete::Column::IsActive.eq(is_active));
        }

        if let Some(code) = &filter.discipline_code {
            let discipline_ids: Vec<i32> = entity::prelude::Discipline::find()
                .filter(entity::discipline::Column::Code.eq(code.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|discipline| discipline.id)
                .collect();
            let athlete_ids = self.linked_athlete_ids(discipline_ids).await?;
            condition = condition.add(entity::athlete::Column::Id.is_in(athlete_ids));
        }

        Ok(condition)
    }

    async fn sport_condition(&self, sport_id: i32) -> Result<Condition, AppError> {
        let team_ids: Vec<i32> = entity::prelude::Team::find()
            .filter(entity::team::Column::SportId.eq(sport_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|team| team.id)
            .collect();
        let discipline_ids: Vec<i32> = entity::prelude::Discipline::find()
            .filter(entity::discipline::Column::SportId.eq(sport_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|discipline| discipline.id)
            .collect();
        let athlete_ids = self.linked_athlete_ids(discipline_ids).await?;

        Ok(Condition::any()
            .add(entity::athlete::Column::TeamId.is_in(team_ids))
            .add(entity::athlete::Column::Id.is_in(athlete_ids)))
    }

    async fn linked_athlete_ids(&self, discipline_ids: Vec<i32>) -> Result<Vec<i32>, AppError> {
        let mut ids: Vec<i32> = entity::prelude::AthleteDiscipline::find()
            .filter(entity::athlete_discipline::Column::DisciplineId.is_in(discipline_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.athlete_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(ids)
    }

    async fn hydrate_one(&self, entity: entity::athlete::Model) -> Result<Athlete, AppError> {
        let id = entity.id;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Athlete {} lost during hydration", id)))
    }

    /// Resolves team codes, position codes and discipline links for a batch of athletes,
    /// preserving the input order
    async fn hydrate(
        &self,
        entities: Vec<entity::athlete::Model>,
    ) -> Result<Vec<Athlete>, AppError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let athlete_ids: Vec<i32> = entities.iter().map(|a| a.id).collect();
        let team_ids: Vec<i32> = entities.iter().filter_map(|a| a.team_id).collect();
        let position_ids: Vec<i32> = entities.iter().filter_map(|a| a.position_id).collect();

        let team_codes: HashMap<i32, String> = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|team| (team.id, team.code))
            .collect();

        let position_codes: HashMap<i32, String> = entity::prelude::Position::find()
            .filter(entity::position::Column::Id.is_in(position_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|position| (position.id, position.code))
            .collect();

        let links = entity::prelude::AthleteDiscipline::find()
            .filter(entity::athlete_discipline::Column::AthleteId.is_in(athlete_ids))
            .order_by_asc(entity::athlete_discipline::Column::Id)
            .all(self.db)
            .await?;

        let discipline_ids: Vec<i32> = links.iter().map(|link| link.discipline_id).collect();
        let disciplines: HashMap<i32, entity::discipline::Model> =
            entity::prelude::Discipline::find()
                .filter(entity::discipline::Column::Id.is_in(discipline_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|discipline| (discipline.id, discipline))
                .collect();

        let mut links_by_athlete: HashMap<i32, Vec<AthleteDiscipline>> = HashMap::new();
        for link in links {
            if let Some(discipline) = disciplines.get(&link.discipline_id) {
                links_by_athlete
                    .entry(link.athlete_id)
                    .or_default()
                    .push(AthleteDiscipline {
                        discipline_id: discipline.id,
                        code: discipline.code.clone(),
                        name: discipline.name.clone(),
                        current_rank: link.current_rank,
                    });
            }
        }

        entities
            .into_iter()
            .map(|entity| {
                let team_code = entity.team_id.and_then(|id| team_codes.get(&id).cloned());
                let position_code = entity
                    .position_id
                    .and_then(|id| position_codes.get(&id).cloned());
                let disciplines = links_by_athlete.remove(&entity.id).unwrap_or_default();

                Athlete::from_entity(entity, team_code, position_code, disciplines)
            })
            .collect()
    }
}

fn ordered(select: Select<entity::athlete::Entity>) -> Select<entity::athlete::Entity> {
    select
        .order_by_asc(entity::athlete::Column::LastName)
        .order_by_asc(entity::athlete::Column::FirstName)
        .order_by_asc(entity::athlete::Column::Id)
}
