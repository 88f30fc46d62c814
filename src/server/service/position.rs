use sea_orm::DatabaseConnection;

use crate::{
    model::position::{CreatePositionDto, UpdatePositionDto},
    server::{
        data::{position::PositionRepository, sport::SportRepository},
        error::AppError,
        model::position::{CreatePositionParam, Position, UpdatePositionParam},
    },
};

pub struct PositionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a position for a team sport
    ///
    /// # Returns
    /// - `Ok(Position)` - The created position
    /// - `Err(AppError::NotFound)` - The sport does not exist
    /// - `Err(AppError::BadRequest)` - The sport is an individual sport
    /// - `Err(AppError::Conflict)` - The code is already used within the sport
    pub async fn create(&self, dto: CreatePositionDto) -> Result<Position, AppError> {
        let repo = PositionRepository::new(self.db);
        let param = CreatePositionParam::from(dto);

        let sport = SportRepository::new(self.db)
            .find_by_id(param.sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        if !sport.is_team_sport {
            return Err(AppError::BadRequest(format!(
                "Positions can only be created for team sports, {} is an individual sport",
                sport.name
            )));
        }

        if repo.find_by_code(sport.id, &param.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Position {} already exists for {}",
                param.code, sport.name
            )));
        }

        repo.create(param).await
    }

    pub async fn get_all(&self) -> Result<Vec<Position>, AppError> {
        PositionRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Position, AppError> {
        PositionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Position>, AppError> {
        SportRepository::new(self.db)
            .find_by_id(sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        PositionRepository::new(self.db).get_by_sport(sport_id).await
    }

    pub async fn update(&self, id: i32, dto: UpdatePositionDto) -> Result<Position, AppError> {
        let repo = PositionRepository::new(self.db);
        let param = UpdatePositionParam::from(dto);
        let existing = self.get_by_id(id).await?;

        if let Some(code) = param.code.as_deref() {
            if let Some(other) = repo.find_by_code(existing.sport_id, code).await? {
                if other.id != id {
                    return Err(AppError::Conflict(format!(
                        "Position {} already exists for this sport",
                        code
                    )));
                }
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))
    }

    /// Deletes a position no active athlete plays
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PositionRepository::new(self.db);
        self.get_by_id(id).await?;

        let athletes = repo.count_active_athletes(id).await?;
        if athletes > 0 {
            return Err(AppError::Conflict(format!(
                "Position is assigned to {} active athletes",
                athletes
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
