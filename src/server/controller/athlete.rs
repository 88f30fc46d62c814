use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageDto, PaginationDto},
        athlete::{
            AddAthleteDisciplineDto, AthleteDto, AthleteSeasonSummaryDto, AthleteStatsDto,
            CreateIndividualAthleteDto, CreateTeamAthleteDto, DeleteAthleteDto,
            UpdateAthleteDto, UpdateAthleteRankDto,
        },
        sport::SportType,
    },
    server::{
        controller::param::{AthleteListParam, SeasonParam},
        error::AppError,
        middleware::extract::{Path, Query, Validate, ValidatedJson},
        model::athlete::Athlete,
        service::athlete::AthleteService,
        state::AppState,
        util::url::avatar_url,
    },
};

/// Tag for grouping athlete endpoints in OpenAPI documentation
pub static ATHLETE_TAG: &str = "athlete";

/// Converts an athlete to its DTO with the avatar URL for the requesting host.
pub fn athlete_dto(headers: &HeaderMap, athlete: Athlete) -> AthleteDto {
    let url = avatar_url(headers, &athlete.code);
    athlete.into_dto(url)
}

pub fn athlete_dtos(headers: &HeaderMap, athletes: Vec<Athlete>) -> Vec<AthleteDto> {
    athletes
        .into_iter()
        .map(|athlete| athlete_dto(headers, athlete))
        .collect()
}

/// List athletes.
///
/// Returns one page of athletes ordered by last name then first name. Filters combine
/// with AND; `search` matches code, first name or last name case-insensitively.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers used to build avatar URLs
/// - `params` - Pagination and filter parameters
///
/// # Returns
/// - `200 OK` - Page of athletes with pagination metadata
/// - `400 Bad Request` - Page or limit out of range
#[utoipa::path(
    get,
    path = "/api/athletes",
    tag = ATHLETE_TAG,
    params(AthleteListParam),
    responses(
        (status = 200, description = "Page of athletes", body = ApiResponse<PageDto<AthleteDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athletes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AthleteListParam>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let (athletes, total) = AthleteService::new(&state.db)
        .get_paginated(&params.filter(), params.page, params.limit)
        .await?;

    let page = PageDto {
        items: athlete_dtos(&headers, athletes),
        pagination: PaginationDto::new(params.page, params.limit, total),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Athletes retrieved successfully", page)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    responses(
        (status = 200, description = "The athlete", body = ApiResponse<AthleteDto>),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete retrieved successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/code/{code}",
    tag = ATHLETE_TAG,
    params(("code" = String, Path, description = "Athlete code")),
    responses(
        (status = 200, description = "The athlete", body = ApiResponse<AthleteDto>),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete_by_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .get_by_code(code.trim())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete retrieved successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/team/{code}",
    tag = ATHLETE_TAG,
    params(("code" = String, Path, description = "Team code")),
    responses(
        (status = 200, description = "Athletes of the team", body = ApiResponse<Vec<AthleteDto>>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athletes_by_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let athletes = AthleteService::new(&state.db)
        .get_by_team(code.trim())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athletes retrieved successfully",
            athlete_dtos(&headers, athletes),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/position/{code}",
    tag = ATHLETE_TAG,
    params(("code" = String, Path, description = "Position code")),
    responses(
        (status = 200, description = "Athletes playing the position", body = ApiResponse<Vec<AthleteDto>>),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athletes_by_position(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let athletes = AthleteService::new(&state.db)
        .get_by_position(code.trim())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athletes retrieved successfully",
            athlete_dtos(&headers, athletes),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/sport/{sport_type}",
    tag = ATHLETE_TAG,
    params(("sport_type" = SportType, Path, description = "Sport name, e.g. ATHLETICS")),
    responses(
        (status = 200, description = "Athletes of the sport", body = ApiResponse<Vec<AthleteDto>>),
        (status = 400, description = "Unknown sport name", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athletes_by_sport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sport_type): Path<SportType>,
) -> Result<impl IntoResponse, AppError> {
    let athletes = AthleteService::new(&state.db)
        .get_by_sport(sport_type)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athletes retrieved successfully",
            athlete_dtos(&headers, athletes),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/discipline/{code}",
    tag = ATHLETE_TAG,
    params(("code" = String, Path, description = "Discipline code")),
    responses(
        (status = 200, description = "Athletes registered for the discipline", body = ApiResponse<Vec<AthleteDto>>),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athletes_by_discipline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let athletes = AthleteService::new(&state.db)
        .get_by_discipline(code.trim())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athletes retrieved successfully",
            athlete_dtos(&headers, athletes),
        )),
    ))
}

/// Create a team-sport athlete.
///
/// # Returns
/// - `201 Created` - The created athlete
/// - `400 Bad Request` - Invalid data, team of another sport or athlete younger than 16
/// - `404 Not Found` - Unknown team or position
/// - `409 Conflict` - Athlete code already in use
#[utoipa::path(
    post,
    path = "/api/athletes/team",
    tag = ATHLETE_TAG,
    request_body = CreateTeamAthleteDto,
    responses(
        (status = 201, description = "Athlete created", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Invalid athlete data", body = ErrorDto),
        (status = 404, description = "Team or position not found", body = ErrorDto),
        (status = 409, description = "Athlete code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_athlete(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateTeamAthleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .create_team_athlete(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Athlete created successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

/// Create an individual-sport athlete with their disciplines.
///
/// The athlete and every discipline registration are stored in one transaction.
///
/// # Returns
/// - `201 Created` - The created athlete with disciplines
/// - `400 Bad Request` - Invalid data, team sport or discipline codes of another sport
/// - `404 Not Found` - Unknown sport
/// - `409 Conflict` - Athlete code already in use
#[utoipa::path(
    post,
    path = "/api/athletes/individual",
    tag = ATHLETE_TAG,
    request_body = CreateIndividualAthleteDto,
    responses(
        (status = 201, description = "Athlete created", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Invalid athlete data", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Athlete code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_individual_athlete(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateIndividualAthleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .create_individual_athlete(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Athlete created successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    request_body = UpdateAthleteDto,
    responses(
        (status = 200, description = "Athlete updated", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Invalid athlete data", body = ErrorDto),
        (status = 404, description = "Athlete, team or position not found", body = ErrorDto),
        (status = 409, description = "Athlete code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAthleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete updated successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

/// Delete an athlete.
///
/// Athletes with recorded performances are deactivated instead of removed; the
/// response reports which happened.
#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    responses(
        (status = 200, description = "Athlete deleted or deactivated", body = ApiResponse<DeleteAthleteDto>),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = AthleteService::new(&state.db).delete(id).await?;

    let message = if result.soft_deleted {
        "Athlete deactivated because performance history exists"
    } else {
        "Athlete deleted successfully"
    };

    Ok((StatusCode::OK, Json(ApiResponse::new(message, result))))
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}/discipline-rank",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    request_body = UpdateAthleteRankDto,
    responses(
        (status = 200, description = "Rank updated", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Invalid rank", body = ErrorDto),
        (status = 404, description = "Athlete or registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_athlete_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAthleteRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .update_rank(id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete rank updated successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/athletes/{id}/disciplines",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    request_body = AddAthleteDisciplineDto,
    responses(
        (status = 201, description = "Discipline added", body = ApiResponse<AthleteDto>),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 404, description = "Athlete or discipline not found", body = ErrorDto),
        (status = 409, description = "Already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_athlete_discipline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AddAthleteDisciplineDto>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .add_discipline(id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Discipline added successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}/disciplines/{code}",
    tag = ATHLETE_TAG,
    params(
        ("id" = i32, Path, description = "Athlete ID"),
        ("code" = String, Path, description = "Discipline code")
    ),
    responses(
        (status = 200, description = "Discipline removed", body = ApiResponse<AthleteDto>),
        (status = 404, description = "Athlete is not registered for the discipline", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_athlete_discipline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, code)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let athlete = AthleteService::new(&state.db)
        .remove_discipline(id, code.trim())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline removed successfully",
            athlete_dto(&headers, athlete),
        )),
    ))
}

/// Get an athlete with their performances, newest first.
#[utoipa::path(
    get,
    path = "/api/athletes/{id}/stats",
    tag = ATHLETE_TAG,
    params(("id" = i32, Path, description = "Athlete ID"), SeasonParam),
    responses(
        (status = 200, description = "Athlete with performances", body = ApiResponse<AthleteStatsDto>),
        (status = 404, description = "Athlete or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    let (athlete, performances) = AthleteService::new(&state.db)
        .get_stats(id, params.season_id)
        .await?;

    let stats = AthleteStatsDto {
        athlete: athlete_dto(&headers, athlete),
        season_id: params.season_id,
        performances: performances.into_iter().map(|p| p.into_dto()).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Athlete statistics retrieved successfully", stats)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}/season/{season_id}/summary",
    tag = ATHLETE_TAG,
    params(
        ("id" = i32, Path, description = "Athlete ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Season totals and averages", body = ApiResponse<AthleteSeasonSummaryDto>),
        (status = 404, description = "Athlete or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete_season_summary(
    State(state): State<AppState>,
    Path((id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let summary = AthleteService::new(&state.db)
        .get_season_summary(id, season_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete season summary retrieved successfully",
            summary,
        )),
    ))
}
