//! Performance factory for creating test performance rows.
//!
//! Only the comparable metrics (time, distance, height, points, position) and a few
//! counting stats have setters; the remaining sport-specific columns stay empty.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test performances with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::performance::PerformanceFactory;
///
/// let performance = PerformanceFactory::new(&db, athlete.id, event.id, season.id)
///     .discipline(Some(discipline.id))
///     .time(Some(11.9))
///     .personal_best(true)
///     .build()
///     .await?;
/// ```
pub struct PerformanceFactory<'a> {
    db: &'a DatabaseConnection,
    athlete_id: i32,
    event_id: i32,
    season_id: i32,
    discipline_id: Option<i32>,
    date: DateTime<Utc>,
    time: Option<f64>,
    distance: Option<f64>,
    height: Option<f64>,
    points: Option<f64>,
    position: Option<i32>,
    goals_scored: Option<i32>,
    assists: Option<i32>,
    is_personal_best: bool,
    is_season_best: bool,
}

impl<'a> PerformanceFactory<'a> {
    /// Creates a new PerformanceFactory with every metric empty and both best flags cleared.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `athlete_id` - Athlete who performed
    /// - `event_id` - Event the performance was recorded at
    /// - `season_id` - Season of the event
    ///
    /// # Returns
    /// - `PerformanceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, athlete_id: i32, event_id: i32, season_id: i32) -> Self {
        Self {
            db,
            athlete_id,
            event_id,
            season_id,
            discipline_id: None,
            date: Utc::now(),
            time: None,
            distance: None,
            height: None,
            points: None,
            position: None,
            goals_scored: None,
            assists: None,
            is_personal_best: false,
            is_season_best: false,
        }
    }

    pub fn discipline(mut self, discipline_id: Option<i32>) -> Self {
        self.discipline_id = discipline_id;
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: Option<f64>) -> Self {
        self.time = time;
        self
    }

    pub fn distance(mut self, distance: Option<f64>) -> Self {
        self.distance = distance;
        self
    }

    pub fn height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    pub fn points(mut self, points: Option<f64>) -> Self {
        self.points = points;
        self
    }

    pub fn position(mut self, position: Option<i32>) -> Self {
        self.position = position;
        self
    }

    pub fn goals_scored(mut self, goals_scored: Option<i32>) -> Self {
        self.goals_scored = goals_scored;
        self
    }

    pub fn assists(mut self, assists: Option<i32>) -> Self {
        self.assists = assists;
        self
    }

    pub fn personal_best(mut self, is_personal_best: bool) -> Self {
        self.is_personal_best = is_personal_best;
        self
    }

    pub fn season_best(mut self, is_season_best: bool) -> Self {
        self.is_season_best = is_season_best;
        self
    }

    /// Builds and inserts the performance entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::performance::Model)` - Created performance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::performance::Model, DbErr> {
        entity::performance::ActiveModel {
            athlete_id: ActiveValue::Set(self.athlete_id),
            event_id: ActiveValue::Set(self.event_id),
            discipline_id: ActiveValue::Set(self.discipline_id),
            season_id: ActiveValue::Set(self.season_id),
            date: ActiveValue::Set(self.date),
            notes: ActiveValue::Set(None),
            position: ActiveValue::Set(self.position),
            points: ActiveValue::Set(self.points),
            time: ActiveValue::Set(self.time),
            distance: ActiveValue::Set(self.distance),
            height: ActiveValue::Set(self.height),
            minutes_played: ActiveValue::Set(None),
            assists: ActiveValue::Set(self.assists),
            goals_scored: ActiveValue::Set(self.goals_scored),
            goals_conceded: ActiveValue::Set(None),
            yellow_cards: ActiveValue::Set(None),
            red_cards: ActiveValue::Set(None),
            saves: ActiveValue::Set(None),
            two_points: ActiveValue::Set(None),
            three_points: ActiveValue::Set(None),
            free_throws: ActiveValue::Set(None),
            field_goals: ActiveValue::Set(None),
            rebounds: ActiveValue::Set(None),
            steals: ActiveValue::Set(None),
            blocks: ActiveValue::Set(None),
            turnovers: ActiveValue::Set(None),
            wins: ActiveValue::Set(None),
            losses: ActiveValue::Set(None),
            pins: ActiveValue::Set(None),
            technical_falls: ActiveValue::Set(None),
            decisions: ActiveValue::Set(None),
            rounds: ActiveValue::Set(None),
            knockouts: ActiveValue::Set(None),
            knockdowns: ActiveValue::Set(None),
            punches_landed: ActiveValue::Set(None),
            punches_thrown: ActiveValue::Set(None),
            is_personal_best: ActiveValue::Set(self.is_personal_best),
            is_season_best: ActiveValue::Set(self.is_season_best),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty performance row for the given athlete and event.
pub async fn create_performance(
    db: &DatabaseConnection,
    athlete_id: i32,
    event_id: i32,
    season_id: i32,
) -> Result<entity::performance::Model, DbErr> {
    PerformanceFactory::new(db, athlete_id, event_id, season_id)
        .build()
        .await
}
