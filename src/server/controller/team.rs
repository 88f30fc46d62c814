use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        athlete::AthleteDto,
        team::{CreateTeamDto, TeamDto, TeamRosterDto, UpdateTeamDto},
    },
    server::{
        controller::athlete::{athlete_dto, athlete_dtos},
        error::AppError,
        middleware::extract::{Path, ValidatedJson},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team for a team sport.
///
/// # Returns
/// - `201 Created` - The created team
/// - `400 Bad Request` - Invalid data or the sport is an individual sport
/// - `404 Not Found` - Unknown sport
/// - `409 Conflict` - Team code already in use
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = ApiResponse<TeamDto>),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Team code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Team created successfully", team.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = ApiResponse<Vec<TeamDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;
    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Teams retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "The team", body = ApiResponse<TeamDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Team retrieved successfully", team.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams/sport/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Teams of the sport", body = ApiResponse<Vec<TeamDto>>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams_by_sport(
    State(state): State<AppState>,
    Path(sport_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_by_sport(sport_id).await?;
    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Teams retrieved successfully", dtos)),
    ))
}

/// Get a team with its active athletes ordered by last name.
#[utoipa::path(
    get,
    path = "/api/teams/code/{code}/roster",
    tag = TEAM_TAG,
    params(("code" = String, Path, description = "Team code")),
    responses(
        (status = 200, description = "Team roster", body = ApiResponse<TeamRosterDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_roster(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (team, athletes) = TeamService::new(&state.db)
        .get_roster(code.trim())
        .await?;

    let roster = TeamRosterDto {
        team: team.into_dto(),
        athletes: athlete_dtos(&headers, athletes),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Team roster retrieved successfully", roster)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = ApiResponse<TeamDto>),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Team updated successfully", team.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team still has active athletes", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Team deleted successfully"))))
}

/// Detach an athlete from their team and position.
#[utoipa::path(
    delete,
    path = "/api/teams/members/{athlete_id}",
    tag = TEAM_TAG,
    params(("athlete_id" = i32, Path, description = "Athlete ID")),
    responses(
        (status = 200, description = "Athlete removed from the team", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Athlete is not on a team", body = ErrorDto),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(athlete_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = TeamService::new(&state.db)
        .remove_member(athlete_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete removed from team successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}
