//! Athlete registration, profile maintenance and per-athlete statistics.

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        athlete::{
            AddAthleteDisciplineDto, AthleteSeasonSummaryDto, CreateIndividualAthleteDto,
            CreateTeamAthleteDto, DeleteAthleteDto, UpdateAthleteDto, UpdateAthleteRankDto,
        },
        sport::SportType,
    },
    server::{
        data::{
            athlete::AthleteRepository, discipline::DisciplineRepository,
            performance::PerformanceRepository, position::PositionRepository,
            season::SeasonRepository, sport::SportRepository, team::TeamRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            athlete::{Athlete, AthleteFilter, CreateAthleteParam, UpdateAthleteParam},
            performance::Performance,
        },
        util::stats::{metric_averages, metric_totals},
    },
};

pub struct AthleteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AthleteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of athletes matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &AthleteFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Athlete>, u64), AppError> {
        AthleteRepository::new(self.db)
            .get_paginated(filter, page, limit)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Athlete, AppError> {
        AthleteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Athlete, AppError> {
        AthleteRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Athlete {} not found", code)))
    }

    pub async fn get_by_team(&self, team_code: &str) -> Result<Vec<Athlete>, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_code(team_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_code)))?;

        AthleteRepository::new(self.db).get_by_team(team.id).await
    }

    /// Gets athletes playing a position code in any sport
    pub async fn get_by_position(&self, position_code: &str) -> Result<Vec<Athlete>, AppError> {
        let positions = PositionRepository::new(self.db)
            .get_by_code(position_code)
            .await?;
        if positions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Position {} not found",
                position_code
            )));
        }

        let ids = positions.into_iter().map(|p| p.id).collect();
        AthleteRepository::new(self.db).get_by_position_ids(ids).await
    }

    pub async fn get_by_sport(&self, sport_type: SportType) -> Result<Vec<Athlete>, AppError> {
        let sport = SportRepository::new(self.db)
            .find_by_name(sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", sport_type)))?;

        AthleteRepository::new(self.db).get_by_sport(sport.id).await
    }

    /// Gets athletes registered for a discipline code in any sport
    pub async fn get_by_discipline(&self, discipline_code: &str) -> Result<Vec<Athlete>, AppError> {
        let disciplines = DisciplineRepository::new(self.db)
            .get_by_code(discipline_code)
            .await?;
        if disciplines.is_empty() {
            return Err(AppError::NotFound(format!(
                "Discipline {} not found",
                discipline_code
            )));
        }

        let ids = disciplines.into_iter().map(|d| d.id).collect();
        AthleteRepository::new(self.db)
            .get_by_discipline_ids(ids)
            .await
    }

    /// Registers an athlete on a team
    ///
    /// # Returns
    /// - `Ok(Athlete)` - The created athlete
    /// - `Err(AppError::Conflict)` - The athlete code is taken
    /// - `Err(AppError::NotFound)` - Team, sport or position does not exist
    /// - `Err(AppError::BadRequest)` - The team does not play the requested sport
    pub async fn create_team_athlete(&self, dto: CreateTeamAthleteDto) -> Result<Athlete, AppError> {
        let code = dto.code.trim().to_string();
        self.ensure_code_available(&code, None).await?;

        let sport = SportRepository::new(self.db)
            .find_by_name(dto.sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", dto.sport_type)))?;

        let team_code = dto.team_code.trim();
        let team = TeamRepository::new(self.db)
            .find_by_code(team_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_code)))?;

        if team.sport_id != sport.id {
            return Err(AppError::BadRequest(format!(
                "Team {} does not play {}",
                team.code, sport.name
            )));
        }

        let position_code = dto.position_code.trim();
        let position = PositionRepository::new(self.db)
            .find_by_code(sport.id, position_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Position {} not found for {}",
                    position_code, sport.name
                ))
            })?;

        AthleteRepository::new(self.db)
            .create(CreateAthleteParam {
                code,
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                team_id: Some(team.id),
                position_id: Some(position.id),
                date_of_birth: dto.date_of_birth,
                nationality: dto.nationality.trim().to_string(),
                gender: dto.gender,
                height: dto.height,
                weight: dto.weight,
                bio: dto.bio,
            })
            .await
    }

    /// Registers an individual-sport athlete together with their disciplines
    ///
    /// The athlete row and every discipline link are inserted in one transaction.
    ///
    /// # Returns
    /// - `Ok(Athlete)` - The created athlete with its disciplines
    /// - `Err(AppError::Conflict)` - The athlete code is taken
    /// - `Err(AppError::NotFound)` - The sport does not exist
    /// - `Err(AppError::BadRequest)` - The sport is a team sport or a discipline code does
    ///   not belong to it
    pub async fn create_individual_athlete(
        &self,
        dto: CreateIndividualAthleteDto,
    ) -> Result<Athlete, AppError> {
        let code = dto.code.trim().to_string();
        self.ensure_code_available(&code, None).await?;

        let sport = SportRepository::new(self.db)
            .find_by_name(dto.sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", dto.sport_type)))?;

        if sport.is_team_sport {
            return Err(AppError::BadRequest(format!(
                "{} is a team sport, register the athlete on a team instead",
                sport.name
            )));
        }

        let discipline_repo = DisciplineRepository::new(self.db);
        let mut links = Vec::new();
        let mut invalid = Vec::new();
        for entry in &dto.disciplines {
            let entry_code = entry.code.trim();
            match discipline_repo.find_by_code(sport.id, entry_code).await? {
                Some(discipline) => links.push((discipline.id, entry.current_rank)),
                None => invalid.push(entry_code.to_string()),
            }
        }

        if !invalid.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Invalid disciplines for {}: {}",
                sport.name,
                invalid.join(", ")
            )));
        }

        let mut seen = HashSet::new();
        links.retain(|(discipline_id, _)| seen.insert(*discipline_id));

        let txn = self.db.begin().await?;

        let athlete = AthleteRepository::new(&txn)
            .create(CreateAthleteParam {
                code,
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                team_id: None,
                position_id: None,
                date_of_birth: dto.date_of_birth,
                nationality: dto.nationality.trim().to_string(),
                gender: dto.gender,
                height: dto.height,
                weight: dto.weight,
                bio: dto.bio,
            })
            .await?;

        let txn_disciplines = DisciplineRepository::new(&txn);
        for (discipline_id, current_rank) in links {
            txn_disciplines
                .create_link(athlete.id, discipline_id, current_rank)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Registered {} athlete {} with {} disciplines",
            sport.name,
            athlete.code,
            seen.len()
        );

        self.reload(athlete.id).await
    }

    /// Applies a partial update to an athlete
    ///
    /// A new team must exist; a new position code must belong to the sport of the
    /// athlete's (new or current) team.
    pub async fn update(&self, id: i32, dto: UpdateAthleteDto) -> Result<Athlete, AppError> {
        let existing = self.get_by_id(id).await?;

        let code = dto.code.map(|code| code.trim().to_string());
        if let Some(code) = code.as_deref() {
            self.ensure_code_available(code, Some(id)).await?;
        }

        let team = match dto.team_code.as_deref().map(str::trim) {
            Some(team_code) => Some(
                TeamRepository::new(self.db)
                    .find_by_code(team_code)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_code)))?,
            ),
            None => None,
        };

        let position_id = match dto.position_code.as_deref().map(str::trim) {
            Some(position_code) => {
                let team_id = team.as_ref().map(|t| t.id).or(existing.team_id);
                let Some(team_id) = team_id else {
                    return Err(AppError::BadRequest(
                        "A position can only be assigned to a team athlete".to_string(),
                    ));
                };
                let sport_id = match &team {
                    Some(team) => team.sport_id,
                    None => {
                        TeamRepository::new(self.db)
                            .find_by_id(team_id)
                            .await?
                            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?
                            .sport_id
                    }
                };

                let position = PositionRepository::new(self.db)
                    .find_by_code(sport_id, position_code)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Position {} not found", position_code))
                    })?;
                Some(position.id)
            }
            None => None,
        };

        let param = UpdateAthleteParam {
            code,
            first_name: dto.first_name.map(|v| v.trim().to_string()),
            last_name: dto.last_name.map(|v| v.trim().to_string()),
            team_id: team.map(|t| t.id),
            position_id,
            date_of_birth: dto.date_of_birth,
            nationality: dto.nationality.map(|v| v.trim().to_string()),
            gender: dto.gender,
            height: dto.height,
            weight: dto.weight,
            bio: dto.bio,
            is_active: dto.is_active,
        };

        AthleteRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))
    }

    /// Deletes an athlete, or deactivates them when performance history exists
    pub async fn delete(&self, id: i32) -> Result<DeleteAthleteDto, AppError> {
        let repo = AthleteRepository::new(self.db);
        self.get_by_id(id).await?;

        let performances = repo.count_performances(id).await?;
        if performances > 0 {
            repo.deactivate(id).await?;
            tracing::info!(
                "Deactivated athlete {} with {} recorded performances",
                id,
                performances
            );

            return Ok(DeleteAthleteDto {
                id,
                soft_deleted: true,
            });
        }

        repo.delete(id).await?;

        Ok(DeleteAthleteDto {
            id,
            soft_deleted: false,
        })
    }

    /// Sets the athlete's rank in one of their disciplines
    pub async fn update_rank(&self, id: i32, dto: UpdateAthleteRankDto) -> Result<Athlete, AppError> {
        let athlete = self.get_by_id(id).await?;
        let discipline_code = dto.discipline_code.trim();

        let link = athlete
            .disciplines
            .iter()
            .find(|d| d.code == discipline_code)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Athlete is not registered for discipline {}",
                    discipline_code
                ))
            })?;

        DisciplineRepository::new(self.db)
            .update_link_rank(id, link.discipline_id, dto.new_rank)
            .await?;

        self.reload(id).await
    }

    /// Registers the athlete for another discipline of their sport
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The athlete plays a team sport
    /// - `Err(AppError::NotFound)` - No discipline with the code exists in the athlete's sport
    /// - `Err(AppError::Conflict)` - The athlete is already registered for it
    pub async fn add_discipline(
        &self,
        id: i32,
        dto: AddAthleteDisciplineDto,
    ) -> Result<Athlete, AppError> {
        let athlete = self.get_by_id(id).await?;
        let discipline_repo = DisciplineRepository::new(self.db);
        let discipline_code = dto.discipline_code.trim();

        if athlete.team_id.is_some() {
            return Err(AppError::BadRequest(
                "Team athletes cannot be registered for disciplines".to_string(),
            ));
        }

        let current_ids = athlete.disciplines.iter().map(|d| d.discipline_id).collect();
        let sport_ids: HashSet<i32> = discipline_repo
            .get_by_ids(current_ids)
            .await?
            .into_iter()
            .map(|d| d.sport_id)
            .collect();

        let discipline = discipline_repo
            .get_by_code(discipline_code)
            .await?
            .into_iter()
            .find(|d| sport_ids.is_empty() || sport_ids.contains(&d.sport_id))
            .ok_or_else(|| {
                AppError::NotFound(format!("Discipline {} not found", discipline_code))
            })?;

        if athlete
            .disciplines
            .iter()
            .any(|d| d.discipline_id == discipline.id)
        {
            return Err(AppError::Conflict(format!(
                "Athlete is already registered for discipline {}",
                discipline.code
            )));
        }

        discipline_repo
            .create_link(id, discipline.id, dto.current_rank)
            .await?;

        self.reload(id).await
    }

    pub async fn remove_discipline(&self, id: i32, discipline_code: &str) -> Result<Athlete, AppError> {
        let athlete = self.get_by_id(id).await?;

        let link = athlete
            .disciplines
            .iter()
            .find(|d| d.code == discipline_code)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Athlete is not registered for discipline {}",
                    discipline_code
                ))
            })?;

        DisciplineRepository::new(self.db)
            .delete_link(id, link.discipline_id)
            .await?;

        self.reload(id).await
    }

    /// Gets an athlete with their performances, newest first, optionally within a season
    pub async fn get_stats(
        &self,
        id: i32,
        season_id: Option<i32>,
    ) -> Result<(Athlete, Vec<Performance>), AppError> {
        let athlete = self.get_by_id(id).await?;
        if let Some(season_id) = season_id {
            self.ensure_season_exists(season_id).await?;
        }

        let performances = PerformanceRepository::new(self.db)
            .get_by_athlete(id, season_id)
            .await?;

        Ok((athlete, performances))
    }

    /// Summarizes an athlete's performances within a season
    pub async fn get_season_summary(
        &self,
        id: i32,
        season_id: i32,
    ) -> Result<AthleteSeasonSummaryDto, AppError> {
        self.get_by_id(id).await?;
        self.ensure_season_exists(season_id).await?;

        let performances = PerformanceRepository::new(self.db)
            .get_by_athlete(id, Some(season_id))
            .await?;
        let metrics: Vec<_> = performances.iter().map(|p| p.metrics).collect();

        let (totals, _) = metric_totals(&metrics);
        let averages = metric_averages(&metrics);

        let best_time = metrics.iter().filter_map(|m| m.time).reduce(f64::min);
        let best_distance = metrics.iter().filter_map(|m| m.distance).reduce(f64::max);
        let best_position = metrics.iter().filter_map(|m| m.position).min();

        Ok(AthleteSeasonSummaryDto {
            athlete_id: id,
            season_id,
            total_performances: performances.len() as u64,
            totals,
            averages,
            best_time,
            best_distance,
            best_position,
        })
    }

    async fn ensure_code_available(&self, code: &str, except_id: Option<i32>) -> Result<(), AppError> {
        if let Some(existing) = AthleteRepository::new(self.db).find_by_code(code).await? {
            if Some(existing.id) != except_id {
                return Err(AppError::Conflict(format!(
                    "Athlete code {} is already in use",
                    code
                )));
            }
        }

        Ok(())
    }

    async fn ensure_season_exists(&self, season_id: i32) -> Result<(), AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        Ok(())
    }

    /// Re-reads an athlete after a write
    async fn reload(&self, id: i32) -> Result<Athlete, AppError> {
        AthleteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "athlete",
                    id,
                }
                .into()
            })
    }
}
