//! Performance data repository for database operations
//!
//! Besides CRUD and the filtered listings, the repository exposes the scoped queries and
//! flag updates the best-record computation runs inside a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::performance::PerformanceMetricsDto,
    server::{
        error::AppError,
        model::performance::{
            BestScope, CreatePerformanceParam, Performance, PerformanceFilter,
            PerformanceSortField, SortOrder,
        },
    },
};

use entity::performance::{ActiveModel, Column};

pub struct PerformanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PerformanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a performance row with its best flags already decided
    pub async fn create(&self, param: CreatePerformanceParam) -> Result<Performance, AppError> {
        let mut active = ActiveModel {
            athlete_id: ActiveValue::Set(param.athlete_id),
            event_id: ActiveValue::Set(param.event_id),
            discipline_id: ActiveValue::Set(param.discipline_id),
            season_id: ActiveValue::Set(param.season_id),
            date: ActiveValue::Set(param.date),
            notes: ActiveValue::Set(param.notes),
            is_personal_best: ActiveValue::Set(param.is_personal_best),
            is_season_best: ActiveValue::Set(param.is_season_best),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        set_metrics(&mut active, &param.metrics);

        let entity = active.insert(self.db).await?;

        Ok(Performance::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Performance>, AppError> {
        let entity = entity::prelude::Performance::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Performance::from_entity))
    }

    /// Finds the row recorded for an athlete at an event in a discipline, if any
    pub async fn find_duplicate(
        &self,
        athlete_id: i32,
        event_id: i32,
        discipline_id: Option<i32>,
    ) -> Result<Option<Performance>, AppError> {
        let entity = entity::prelude::Performance::find()
            .filter(Column::AthleteId.eq(athlete_id))
            .filter(Column::EventId.eq(event_id))
            .filter(discipline_condition(discipline_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Performance::from_entity))
    }

    /// Gets a page of performances matching the filter
    ///
    /// # Arguments
    /// - `filter` - Filters combined with AND plus the requested ordering
    /// - `page` - 1-based page number
    /// - `limit` - Number of rows per page
    ///
    /// # Returns
    /// - `Ok((performances, total))` - The requested page and the total number of matches
    pub async fn get_paginated(
        &self,
        filter: &PerformanceFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Performance>, u64), AppError> {
        let mut query = entity::prelude::Performance::find();
        if let Some(athlete_id) = filter.athlete_id {
            query = query.filter(Column::AthleteId.eq(athlete_id));
        }
        if let Some(event_id) = filter.event_id {
            query = query.filter(Column::EventId.eq(event_id));
        }
        if let Some(discipline_id) = filter.discipline_id {
            query = query.filter(Column::DisciplineId.eq(discipline_id));
        }
        if let Some(season_id) = filter.season_id {
            query = query.filter(Column::SeasonId.eq(season_id));
        }

        let column = match filter.sort_by {
            PerformanceSortField::Date => Column::Date,
            PerformanceSortField::Time => Column::Time,
            PerformanceSortField::Distance => Column::Distance,
            PerformanceSortField::Points => Column::Points,
            PerformanceSortField::Position => Column::Position,
        };
        query = match filter.sort_order {
            SortOrder::Asc => query.order_by_asc(column).order_by_asc(Column::Id),
            SortOrder::Desc => query.order_by_desc(column).order_by_desc(Column::Id),
        };

        let paginator = query.paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((
            entities.into_iter().map(Performance::from_entity).collect(),
            total,
        ))
    }

    /// Gets an athlete's performances, most recent first
    pub async fn get_by_athlete(
        &self,
        athlete_id: i32,
        season_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        let mut query = entity::prelude::Performance::find().filter(Column::AthleteId.eq(athlete_id));
        if let Some(season_id) = season_id {
            query = query.filter(Column::SeasonId.eq(season_id));
        }

        let entities = query
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    /// Gets every row in a best-flag scope in chronological order (date, then ID)
    ///
    /// # Arguments
    /// - `scope` - Athlete, discipline and optional season
    /// - `exclude_id` - Row to leave out, typically the one being evaluated
    pub async fn get_in_scope(
        &self,
        scope: BestScope,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        let mut query = entity::prelude::Performance::find().filter(scope_condition(scope));
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        let entities = query
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    /// Clears the personal-best flag on every row of the scope except `keep_id`
    pub async fn clear_personal_best(
        &self,
        scope: BestScope,
        keep_id: Option<i32>,
    ) -> Result<(), AppError> {
        let mut update = entity::prelude::Performance::update_many()
            .col_expr(Column::IsPersonalBest, Expr::value(false))
            .filter(scope_condition(scope))
            .filter(Column::IsPersonalBest.eq(true));
        if let Some(id) = keep_id {
            update = update.filter(Column::Id.ne(id));
        }
        update.exec(self.db).await?;

        Ok(())
    }

    /// Clears the season-best flag on every row of the scope except `keep_id`
    pub async fn clear_season_best(
        &self,
        scope: BestScope,
        keep_id: Option<i32>,
    ) -> Result<(), AppError> {
        let mut update = entity::prelude::Performance::update_many()
            .col_expr(Column::IsSeasonBest, Expr::value(false))
            .filter(scope_condition(scope))
            .filter(Column::IsSeasonBest.eq(true));
        if let Some(id) = keep_id {
            update = update.filter(Column::Id.ne(id));
        }
        update.exec(self.db).await?;

        Ok(())
    }

    pub async fn set_personal_best(&self, id: i32, value: bool) -> Result<(), AppError> {
        entity::prelude::Performance::update_many()
            .col_expr(Column::IsPersonalBest, Expr::value(value))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_season_best(&self, id: i32, value: bool) -> Result<(), AppError> {
        entity::prelude::Performance::update_many()
            .col_expr(Column::IsSeasonBest, Expr::value(value))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Overwrites the editable fields of a row
    ///
    /// # Returns
    /// - `Ok(Some(Performance))` - The updated row
    /// - `Ok(None)` - No performance exists with the provided ID
    pub async fn update(
        &self,
        id: i32,
        date: DateTime<Utc>,
        notes: Option<String>,
        metrics: &PerformanceMetricsDto,
    ) -> Result<Option<Performance>, AppError> {
        let Some(existing) = entity::prelude::Performance::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.date = ActiveValue::Set(date);
        active.notes = ActiveValue::Set(notes);
        set_metrics(&mut active, metrics);

        let updated = active.update(self.db).await?;

        Ok(Some(Performance::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Performance::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the results of an event ordered by finishing position, then points
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Performance>, AppError> {
        let entities = entity::prelude::Performance::find()
            .filter(Column::EventId.eq(event_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        let mut rows: Vec<Performance> = entities.into_iter().map(Performance::from_entity).collect();
        rows.sort_by(|a, b| {
            let position = |p: &Performance| p.metrics.position.unwrap_or(i32::MAX);
            position(a).cmp(&position(b)).then_with(|| {
                let points = |p: &Performance| p.metrics.points.unwrap_or(f64::MIN);
                points(b).total_cmp(&points(a))
            })
        });

        Ok(rows)
    }

    /// Gets every row of a discipline, optionally within a season, oldest first
    pub async fn get_by_discipline(
        &self,
        discipline_id: i32,
        season_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        let mut query =
            entity::prelude::Performance::find().filter(Column::DisciplineId.eq(discipline_id));
        if let Some(season_id) = season_id {
            query = query.filter(Column::SeasonId.eq(season_id));
        }

        let entities = query
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    /// Gets an athlete's rows within one discipline, optionally within a season, oldest first
    pub async fn get_by_athlete_and_discipline(
        &self,
        athlete_id: i32,
        discipline_id: i32,
        season_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        self.get_in_scope(
            BestScope {
                athlete_id,
                discipline_id: Some(discipline_id),
                season_id,
            },
            None,
        )
        .await
    }

    /// Gets an athlete's personal-best rows, optionally for one discipline
    pub async fn get_personal_bests(
        &self,
        athlete_id: i32,
        discipline_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        let mut query = entity::prelude::Performance::find()
            .filter(Column::AthleteId.eq(athlete_id))
            .filter(Column::IsPersonalBest.eq(true));
        if let Some(discipline_id) = discipline_id {
            query = query.filter(Column::DisciplineId.eq(discipline_id));
        }

        let entities = query.order_by_desc(Column::Date).all(self.db).await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    pub async fn get_season_bests(
        &self,
        athlete_id: i32,
        season_id: i32,
    ) -> Result<Vec<Performance>, AppError> {
        let entities = entity::prelude::Performance::find()
            .filter(Column::AthleteId.eq(athlete_id))
            .filter(Column::SeasonId.eq(season_id))
            .filter(Column::IsSeasonBest.eq(true))
            .order_by_desc(Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    /// Gets the most recent rows recorded at any of the provided events
    pub async fn get_recent_by_events(
        &self,
        event_ids: Vec<i32>,
        limit: u64,
    ) -> Result<Vec<Performance>, AppError> {
        let entities = entity::prelude::Performance::find()
            .filter(Column::EventId.is_in(event_ids))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }

    /// Gets the rows of several athletes at one event
    pub async fn get_by_event_and_athletes(
        &self,
        event_id: i32,
        athlete_ids: Vec<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        let entities = entity::prelude::Performance::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::AthleteId.is_in(athlete_ids))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Performance::from_entity).collect())
    }
}

fn discipline_condition(discipline_id: Option<i32>) -> Condition {
    match discipline_id {
        Some(id) => Condition::all().add(Column::DisciplineId.eq(id)),
        None => Condition::all().add(Column::DisciplineId.is_null()),
    }
}

fn scope_condition(scope: BestScope) -> Condition {
    let mut condition = Condition::all()
        .add(Column::AthleteId.eq(scope.athlete_id))
        .add(discipline_condition(scope.discipline_id));
    if let Some(season_id) = scope.season_id {
        condition = condition.add(Column::SeasonId.eq(season_id));
    }
    condition
}

fn set_metrics(active: &mut ActiveModel, m: &PerformanceMetricsDto) {
    active.position = ActiveValue::Set(m.position);
    active.points = ActiveValue::Set(m.points);
    active.time = ActiveValue::Set(m.time);
    active.distance = ActiveValue::Set(m.distance);
    active.height = ActiveValue::Set(m.height);
    active.minutes_played = ActiveValue::Set(m.minutes_played);
    active.assists = ActiveValue::Set(m.assists);
    active.goals_scored = ActiveValue::Set(m.goals_scored);
    active.goals_conceded = ActiveValue::Set(m.goals_conceded);
    active.yellow_cards = ActiveValue::Set(m.yellow_cards);
    active.red_cards = ActiveValue::Set(m.red_cards);
    active.saves = ActiveValue::Set(m.saves);
    active.two_points = ActiveValue::Set(m.two_points);
    active.three_points = ActiveValue::Set(m.three_points);
    active.free_throws = ActiveValue::Set(m.free_throws);
    active.field_goals = ActiveValue::Set(m.field_goals);
    active.rebounds = ActiveValue::Set(m.rebounds);
    active.steals = ActiveValue::Set(m.steals);
    active.blocks = ActiveValue::Set(m.blocks);
    active.turnovers = ActiveValue::Set(m.turnovers);
    active.wins = ActiveValue::Set(m.wins);
    active.losses = ActiveValue::Set(m.losses);
    active.pins = ActiveValue::Set(m.pins);
    active.technical_falls = ActiveValue::Set(m.technical_falls);
    active.decisions = ActiveValue::Set(m.decisions);
    active.rounds = ActiveValue::Set(m.rounds);
    active.knockouts = ActiveValue::Set(m.knockouts);
    active.knockdowns = ActiveValue::Set(m.knockdowns);
    active.punches_landed = ActiveValue::Set(m.punches_landed);
    active.punches_thrown = ActiveValue::Set(m.punches_thrown);
}
