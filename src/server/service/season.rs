use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::season::{CreateSeasonDto, SeasonStatsDto, UpdateSeasonDto},
    server::{
        data::season::SeasonRepository,
        error::{internal::InternalError, AppError},
        model::season::{Season, UpdateSeasonParam},
    },
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a season, deactivating every other season first when it starts active
    pub async fn create(&self, dto: CreateSeasonDto) -> Result<Season, AppError> {
        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);

        if dto.is_active {
            repo.clear_active().await?;
        }

        let season = repo
            .create(
                dto.name.trim().to_string(),
                dto.season_type,
                dto.start_year,
                dto.end_year,
                dto.is_active,
            )
            .await?;

        txn.commit().await?;

        Ok(season)
    }

    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        SeasonRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))
    }

    pub async fn get_active(&self) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_active()
            .await?
            .ok_or_else(|| AppError::NotFound("No active season".to_string()))
    }

    /// Gets seasons starting or ending in `year`
    pub async fn get_by_year(&self, year: i32) -> Result<Vec<Season>, AppError> {
        SeasonRepository::new(self.db).get_by_year(year).await
    }

    /// Updates a season; `isActive: true` deactivates every other season in the same
    /// transaction
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - The resulting end year precedes the start year
    pub async fn update(&self, id: i32, dto: UpdateSeasonDto) -> Result<Season, AppError> {
        let existing = self.get_by_id(id).await?;

        let start_year = dto.start_year.unwrap_or(existing.start_year);
        let end_year = dto.end_year.unwrap_or(existing.end_year);
        if end_year < start_year {
            return Err(AppError::field(
                "endYear",
                "endYear must not be before startYear",
            ));
        }

        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);

        match dto.is_active {
            Some(true) => {
                repo.clear_active().await?;
                repo.set_active_flag(id, true).await?;
            }
            Some(false) => repo.set_active_flag(id, false).await?,
            None => {}
        }

        let season = repo
            .update(
                id,
                UpdateSeasonParam {
                    name: dto.name.map(|name| name.trim().to_string()),
                    season_type: dto.season_type,
                    start_year: dto.start_year,
                    end_year: dto.end_year,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        txn.commit().await?;

        Ok(season)
    }

    /// Makes a season the only active one
    pub async fn activate(&self, id: i32) -> Result<Season, AppError> {
        self.get_by_id(id).await?;

        let txn = self.db.begin().await?;
        let repo = SeasonRepository::new(&txn);
        repo.clear_active().await?;
        repo.set_active_flag(id, true).await?;
        txn.commit().await?;

        tracing::info!("Season {} is now the active season", id);

        SeasonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "season",
                    id,
                }
                .into()
            })
    }

    /// Deletes a season without events
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SeasonRepository::new(self.db);
        self.get_by_id(id).await?;

        let events = repo.count_events(id).await?;
        if events > 0 {
            return Err(AppError::Conflict(format!(
                "Season still has {} events",
                events
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn stats(&self, id: i32) -> Result<SeasonStatsDto, AppError> {
        self.get_by_id(id).await?;

        SeasonRepository::new(self.db).stats(id).await
    }
}
