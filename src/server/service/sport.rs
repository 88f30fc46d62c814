use sea_orm::DatabaseConnection;

use crate::{
    model::sport::{CreateSportDto, SportDetailDto, SportStatsDto, UpdateSportDto},
    server::{
        data::{
            discipline::DisciplineRepository, position::PositionRepository,
            sport::SportRepository,
        },
        error::AppError,
        model::sport::Sport,
    },
};

pub struct SportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sport
    ///
    /// # Returns
    /// - `Ok(Sport)` - The created sport
    /// - `Err(AppError::Conflict)` - A sport with the same name already exists
    pub async fn create(&self, dto: CreateSportDto) -> Result<Sport, AppError> {
        let repo = SportRepository::new(self.db);

        if repo.find_by_name(dto.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Sport {} already exists",
                dto.name
            )));
        }

        repo.create(dto.name, dto.is_team_sport).await
    }

    pub async fn get_all(&self) -> Result<Vec<Sport>, AppError> {
        SportRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Sport, AppError> {
        SportRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))
    }

    /// Gets a sport along with its positions and disciplines
    pub async fn get_detail(&self, id: i32) -> Result<SportDetailDto, AppError> {
        let sport = self.get_by_id(id).await?;

        let positions = PositionRepository::new(self.db).get_by_sport(id).await?;
        let disciplines = DisciplineRepository::new(self.db).get_by_sport(id).await?;

        Ok(SportDetailDto {
            id: sport.id,
            name: sport.name,
            is_team_sport: sport.is_team_sport,
            positions: positions.into_iter().map(|p| p.into_dto()).collect(),
            disciplines: disciplines.into_iter().map(|d| d.into_dto()).collect(),
        })
    }

    pub async fn update(&self, id: i32, dto: UpdateSportDto) -> Result<Sport, AppError> {
        let repo = SportRepository::new(self.db);

        if let Some(name) = dto.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(format!("Sport {} already exists", name)));
                }
            }
        }

        repo.update(id, dto.name, dto.is_team_sport)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))
    }

    /// Deletes a sport no other record references
    ///
    /// # Returns
    /// - `Ok(())` - The sport was deleted
    /// - `Err(AppError::NotFound)` - No sport with the provided ID
    /// - `Err(AppError::Conflict)` - Teams, positions, disciplines or events still reference it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SportRepository::new(self.db);
        self.get_by_id(id).await?;

        let dependents = repo.count_dependents(id).await?;
        if dependents.any() {
            return Err(AppError::Conflict(format!(
                "Sport is still referenced by {} teams, {} positions, {} disciplines and {} events",
                dependents.teams, dependents.positions, dependents.disciplines, dependents.events
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn stats(&self, id: i32) -> Result<SportStatsDto, AppError> {
        let repo = SportRepository::new(self.db);
        let sport = self.get_by_id(id).await?;

        let dependents = repo.count_dependents(id).await?;
        let active_athletes = repo.count_active_athletes(id).await?;

        Ok(SportStatsDto {
            sport_id: sport.id,
            name: sport.name,
            teams: dependents.teams,
            positions: dependents.positions,
            disciplines: dependents.disciplines,
            events: dependents.events,
            active_athletes,
        })
    }
}
