use sea_orm::DatabaseConnection;

use crate::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        data::{athlete::AthleteRepository, sport::SportRepository, team::TeamRepository},
        error::AppError,
        model::{
            athlete::Athlete,
            team::{CreateTeamParam, Team, UpdateTeamParam},
        },
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team for a team sport
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::NotFound)` - The sport does not exist
    /// - `Err(AppError::BadRequest)` - The sport is an individual sport
    /// - `Err(AppError::Conflict)` - Another team already uses the code
    pub async fn create(&self, dto: CreateTeamDto) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let param = CreateTeamParam::from(dto);

        let sport = SportRepository::new(self.db)
            .find_by_id(param.sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        if !sport.is_team_sport {
            return Err(AppError::BadRequest(format!(
                "Teams can only be created for team sports, {} is an individual sport",
                sport.name
            )));
        }

        if repo.find_by_code(&param.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Team {} already exists",
                param.code
            )));
        }

        repo.create(param).await
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        TeamRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    pub async fn get_by_sport(&self, sport_id: i32) -> Result<Vec<Team>, AppError> {
        SportRepository::new(self.db)
            .find_by_id(sport_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))?;

        TeamRepository::new(self.db).get_by_sport(sport_id).await
    }

    /// Gets a team and its active athletes ordered by last then first name
    pub async fn get_roster(&self, code: &str) -> Result<(Team, Vec<Athlete>), AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", code)))?;

        let athletes = AthleteRepository::new(self.db)
            .get_active_by_team(team.id)
            .await?;

        Ok((team, athletes))
    }

    pub async fn update(&self, id: i32, dto: UpdateTeamDto) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let param = UpdateTeamParam::from(dto);

        if let Some(code) = param.code.as_deref() {
            if let Some(other) = repo.find_by_code(code).await? {
                if other.id != id {
                    return Err(AppError::Conflict(format!("Team {} already exists", code)));
                }
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Deletes a team without active athletes
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);
        self.get_by_id(id).await?;

        let athletes = repo.count_active_athletes(id).await?;
        if athletes > 0 {
            return Err(AppError::Conflict(format!(
                "Team still has {} active athletes",
                athletes
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Detaches an athlete from their team and position
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The athlete does not exist
    /// - `Err(AppError::BadRequest)` - The athlete is not on a team
    pub async fn remove_member(&self, athlete_id: i32) -> Result<Athlete, AppError> {
        let repo = AthleteRepository::new(self.db);

        let athlete = repo
            .find_by_id(athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))?;

        if athlete.team_id.is_none() {
            return Err(AppError::BadRequest(
                "Athlete is not a member of any team".to_string(),
            ));
        }

        repo.clear_team(athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))
    }
}
