//! Event scheduling and the event status lifecycle.

use std::collections::BTreeSet;

use chrono::Datelike;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::{CreateEventDto, EventStatus, UpdateEventDto},
        sport::SportType,
    },
    server::{
        data::{
            event::EventRepository, gameday::GamedayRepository,
            performance::PerformanceRepository, season::SeasonRepository, sport::SportRepository,
            venue::VenueRepository,
        },
        error::AppError,
        model::event::{can_transition, CreateEventParam, Event},
        service::performance::{recalculate_bests, unit_of},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules an event
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event, `SCHEDULED` unless another status was given
    /// - `Err(AppError::Conflict)` - The event code is taken
    /// - `Err(AppError::NotFound)` - Sport, season, gameday or venue does not exist
    /// - `Err(AppError::BadRequest)` - The gameday belongs to another season
    pub async fn create(&self, dto: CreateEventDto) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);
        let code = dto.code.trim().to_string();

        if repo.find_by_code(&code).await?.is_some() {
            return Err(AppError::Conflict(format!("Event {} already exists", code)));
        }

        let sport = SportRepository::new(self.db)
            .find_by_name(dto.sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", dto.sport_type)))?;

        SeasonRepository::new(self.db)
            .find_by_id(dto.season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        let gameday = GamedayRepository::new(self.db)
            .find_by_id(dto.gameday_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gameday not found".to_string()))?;
        if gameday.season_id != dto.season_id {
            return Err(AppError::BadRequest(format!(
                "Gameday {} does not belong to season {}",
                gameday.id, dto.season_id
            )));
        }

        if let Some(venue_id) = dto.venue_id {
            self.ensure_venue_exists(venue_id).await?;
        }

        repo.create(CreateEventParam {
            name: dto.name.trim().to_string(),
            code,
            sport_id: sport.id,
            year: dto.year.unwrap_or_else(|| dto.start_date.year()),
            season_id: dto.season_id,
            gameday_id: gameday.id,
            venue_id: dto.venue_id,
            gender: dto.gender,
            start_date: dto.start_date,
            end_date: dto.end_date,
            location: dto.location,
            description: dto.description,
            status: dto.status.unwrap_or(EventStatus::Scheduled),
        })
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        EventRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn get_by_sport(&self, sport_type: SportType) -> Result<Vec<Event>, AppError> {
        let sport = SportRepository::new(self.db)
            .find_by_name(sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", sport_type)))?;

        EventRepository::new(self.db).get_by_sport(sport.id).await
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Event>, AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        EventRepository::new(self.db).get_by_season(season_id).await
    }

    pub async fn get_by_gameday(&self, gameday_id: i32) -> Result<Vec<Event>, AppError> {
        GamedayRepository::new(self.db)
            .find_by_id(gameday_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gameday not found".to_string()))?;

        EventRepository::new(self.db).get_by_gameday(gameday_id).await
    }

    /// Gets the next `limit` scheduled events by start date
    pub async fn get_upcoming(&self, limit: u64) -> Result<Vec<Event>, AppError> {
        EventRepository::new(self.db).get_upcoming(limit).await
    }

    /// Gets events currently live
    pub async fn get_active(&self) -> Result<Vec<Event>, AppError> {
        EventRepository::new(self.db)
            .get_by_status(EventStatus::Live)
            .await
    }

    /// Updates the descriptive fields of an event
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - The resulting end date precedes the start date
    pub async fn update(&self, id: i32, dto: UpdateEventDto) -> Result<Event, AppError> {
        let existing = self.get_by_id(id).await?;

        let start_date = dto.start_date.unwrap_or(existing.start_date);
        if let Some(end_date) = dto.end_date.or(existing.end_date) {
            if end_date < start_date {
                return Err(AppError::field(
                    "endDate",
                    "endDate must not be before startDate",
                ));
            }
        }

        if let Some(venue_id) = dto.venue_id {
            self.ensure_venue_exists(venue_id).await?;
        }

        EventRepository::new(self.db)
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Moves an event to another status
    ///
    /// Requesting the current status changes nothing.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The transition is not allowed
    pub async fn update_status(&self, id: i32, status: EventStatus) -> Result<Event, AppError> {
        let existing = self.get_by_id(id).await?;

        if existing.status == status {
            return Ok(existing);
        }

        if !can_transition(existing.status, status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change event status from {} to {}",
                existing.status, status
            )));
        }

        let updated = EventRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        tracing::info!(
            "Event {} moved from {} to {}",
            updated.code,
            existing.status,
            status
        );

        Ok(updated)
    }

    /// Deletes an event together with its performances
    ///
    /// Best flags of every athlete and discipline that lost a row are recomputed in the
    /// same transaction.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The event is live
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;

        if existing.status == EventStatus::Live {
            return Err(AppError::BadRequest(
                "A live event cannot be deleted".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let affected: BTreeSet<(i32, Option<i32>, i32)> = PerformanceRepository::new(&txn)
            .get_by_event(id)
            .await?
            .into_iter()
            .map(|p| (p.athlete_id, p.discipline_id, p.season_id))
            .collect();

        EventRepository::new(&txn).delete(id).await?;

        for (athlete_id, discipline_id, season_id) in &affected {
            let unit = unit_of(&txn, *discipline_id).await?;
            recalculate_bests(&txn, unit, *athlete_id, *discipline_id, *season_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted event {} and recomputed bests for {} athlete disciplines",
            existing.code,
            affected.len()
        );

        Ok(())
    }

    async fn ensure_venue_exists(&self, venue_id: i32) -> Result<(), AppError> {
        VenueRepository::new(self.db)
            .find_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        Ok(())
    }
}
