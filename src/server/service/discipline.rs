use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::discipline::{AddDisciplineAthleteDto, CreateDisciplineDto, UpdateDisciplineDto},
    server::{
        data::{
            athlete::AthleteRepository, discipline::DisciplineRepository, sport::SportRepository,
        },
        error::AppError,
        model::discipline::{
            CreateDisciplineParam, Discipline, RankedAthlete, UpdateDisciplineParam,
        },
    },
};

pub struct DisciplineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DisciplineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a discipline for an individual sport
    ///
    /// # Returns
    /// - `Ok(Discipline)` - The created discipline
    /// - `Err(AppError::NotFound)` - The sport does not exist
    /// - `Err(AppError::BadRequest)` - The sport is a team sport
    /// - `Err(AppError::Conflict)` - The code is already used within the sport
    pub async fn create(&self, dto: CreateDisciplineDto) -> Result<Discipline, AppError> {
        let repo = DisciplineRepository::new(self.db);
        let param = CreateDisciplineParam::from(dto);

        let sport = SportRepository::new(self.db)
            .find_by_id(param.sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        if sport.is_team_sport {
            return Err(AppError::BadRequest(format!(
                "Disciplines can only be created for individual sports, {} is a team sport",
                sport.name
            )));
        }

        if repo.find_by_code(sport.id, &param.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Discipline {} already exists for {}",
                param.code, sport.name
            )));
        }

        repo.create(param).await
    }

    pub async fn get_all(&self) -> Result<Vec<Discipline>, AppError> {
        DisciplineRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Discipline, AppError> {
        DisciplineRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Discipline>, AppError> {
        SportRepository::new(self.db)
            .find_by_id(sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        DisciplineRepository::new(self.db).get_by_sport(sport_id).await
    }

    pub async fn update(&self, id: i32, dto: UpdateDisciplineDto) -> Result<Discipline, AppError> {
        DisciplineRepository::new(self.db)
            .update(id, UpdateDisciplineParam::from(dto))
            .await?
            .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))
    }

    /// Deletes a discipline along with its athlete registrations
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Performances were recorded in the discipline
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DisciplineRepository::new(self.db);
        self.get_by_id(id).await?;

        let performances = repo.count_performances(id).await?;
        if performances > 0 {
            return Err(AppError::Conflict(format!(
                "Discipline has {} recorded performances",
                performances
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets the athletes registered for a discipline, ranked athletes first
    pub async fn get_athletes(&self, id: i32) -> Result<Vec<RankedAthlete>, AppError> {
        self.get_by_id(id).await?;

        let links = DisciplineRepository::new(self.db).get_links(id).await?;
        let ids = links.iter().map(|link| link.athlete_id).collect();
        let mut athletes: HashMap<i32, _> = AthleteRepository::new(self.db)
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|athlete| (athlete.id, athlete))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|link| {
                athletes.remove(&link.athlete_id).map(|athlete| RankedAthlete {
                    current_rank: link.current_rank,
                    athlete,
                })
            })
            .collect())
    }

    /// Gets up to `limit` ranked athletes of a discipline by ascending rank
    pub async fn get_rankings(&self, id: i32, limit: u64) -> Result<Vec<RankedAthlete>, AppError> {
        let athletes = self.get_athletes(id).await?;

        Ok(athletes
            .into_iter()
            .filter(|ranked| ranked.current_rank.is_some())
            .take(limit as usize)
            .collect())
    }

    /// Registers an athlete for a discipline
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The discipline or athlete does not exist
    /// - `Err(AppError::BadRequest)` - The athlete plays a team sport
    /// - `Err(AppError::Conflict)` - The athlete is already registered
    pub async fn add_athlete(&self, dto: AddDisciplineAthleteDto) -> Result<RankedAthlete, AppError> {
        let repo = DisciplineRepository::new(self.db);
        let athlete_repo = AthleteRepository::new(self.db);

        self.get_by_id(dto.discipline_id).await?;
        let athlete = athlete_repo
            .find_by_id(dto.athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))?;

        if athlete.team_id.is_some() {
            return Err(AppError::BadRequest(
                "Team athletes cannot be registered for disciplines".to_string(),
            ));
        }

        if repo.find_link(athlete.id, dto.discipline_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Athlete is already registered for this discipline".to_string(),
            ));
        }

        let link = repo
            .create_link(athlete.id, dto.discipline_id, dto.current_rank)
            .await?;

        self.ranked(link.athlete_id, link.current_rank).await
    }

    pub async fn remove_athlete(&self, id: i32, athlete_id: i32) -> Result<(), AppError> {
        let removed = DisciplineRepository::new(self.db)
            .delete_link(athlete_id, id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "Athlete is not registered for this discipline".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn update_rank(
        &self,
        id: i32,
        athlete_id: i32,
        current_rank: i32,
    ) -> Result<RankedAthlete, AppError> {
        let link = DisciplineRepository::new(self.db)
            .update_link_rank(athlete_id, id, current_rank)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Athlete is not registered for this discipline".to_string())
            })?;

        self.ranked(link.athlete_id, link.current_rank).await
    }

    async fn ranked(
        &self,
        athlete_id: i32,
        current_rank: Option<i32>,
    ) -> Result<RankedAthlete, AppError> {
        let athlete = AthleteRepository::new(self.db)
            .find_by_id(athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))?;

        Ok(RankedAthlete {
            current_rank,
            athlete,
        })
    }
}
