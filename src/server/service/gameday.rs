use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::gameday::{CreateGamedayDto, UpdateGamedayDto},
    server::{
        data::{gameday::GamedayRepository, season::SeasonRepository},
        error::{internal::InternalError, AppError},
        model::gameday::{CreateGamedayParam, Gameday, GamedaySlot},
    },
};

pub struct GamedayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GamedayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a gameday within an existing season
    ///
    /// A gameday created as current takes the flag from its siblings in the same
    /// transaction.
    pub async fn create(&self, dto: CreateGamedayDto) -> Result<Gameday, AppError> {
        let param = CreateGamedayParam::from(dto);
        self.ensure_season_exists(param.season_id).await?;

        let txn = self.db.begin().await?;
        let repo = GamedayRepository::new(&txn);

        if param.is_current {
            repo.clear_current(param.season_id).await?;
        }
        let gameday = repo.create(param).await?;

        txn.commit().await?;

        Ok(gameday)
    }

    pub async fn get_all(&self) -> Result<Vec<Gameday>, AppError> {
        GamedayRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Gameday, AppError> {
        GamedayRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gameday not found".to_string()))
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Gameday>, AppError> {
        self.ensure_season_exists(season_id).await?;

        GamedayRepository::new(self.db).get_by_season(season_id).await
    }

    /// Gets the current, next or previous gameday, optionally within one season
    pub async fn get_slot(
        &self,
        slot: GamedaySlot,
        season_id: Option<i32>,
    ) -> Result<Gameday, AppError> {
        GamedayRepository::new(self.db)
            .find_slot(slot, season_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No {} gameday", slot.label())))
    }

    pub async fn update(&self, id: i32, dto: UpdateGamedayDto) -> Result<Gameday, AppError> {
        GamedayRepository::new(self.db)
            .update(
                id,
                dto.name.map(|name| name.trim().to_string()),
                dto.game_number,
                dto.scheduled_date,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Gameday not found".to_string()))
    }

    /// Makes a gameday the current one of its season
    ///
    /// Clears `isCurrent` on every gameday of the season and `isNext` on the target,
    /// in one transaction.
    pub async fn set_current(&self, id: i32) -> Result<Gameday, AppError> {
        let gameday = self.get_by_id(id).await?;

        let txn = self.db.begin().await?;
        let repo = GamedayRepository::new(&txn);
        repo.clear_current(gameday.season_id).await?;
        let updated = repo
            .set_flags(id, gameday.finished, gameday.is_previous, true, false)
            .await?;
        txn.commit().await?;

        updated.ok_or_else(|| missing(id))
    }

    /// Marks a gameday finished and makes it the previous one of its season
    pub async fn finish(&self, id: i32) -> Result<Gameday, AppError> {
        let gameday = self.get_by_id(id).await?;

        let txn = self.db.begin().await?;
        let repo = GamedayRepository::new(&txn);
        repo.clear_previous(gameday.season_id).await?;
        let updated = repo
            .set_flags(id, true, true, false, gameday.is_next)
            .await?;
        txn.commit().await?;

        tracing::info!("Gameday {} of season {} finished", id, gameday.season_id);

        updated.ok_or_else(|| missing(id))
    }

    /// Deletes a gameday without events
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GamedayRepository::new(self.db);
        self.get_by_id(id).await?;

        let events = repo.count_events(id).await?;
        if events > 0 {
            return Err(AppError::Conflict(format!(
                "Gameday still has {} events",
                events
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn ensure_season_exists(&self, season_id: i32) -> Result<(), AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        Ok(())
    }
}

fn missing(id: i32) -> AppError {
    InternalError::MissingAfterWrite {
        entity: "gameday",
        id,
    }
    .into()
}
