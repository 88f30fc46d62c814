use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        discipline::{
            AddDisciplineAthleteDto, CreateDisciplineDto, DisciplineAthleteDto, DisciplineDto,
            UpdateDisciplineDto, UpdateDisciplineRankDto,
        },
    },
    server::{
        controller::param::LimitParam,
        error::AppError,
        middleware::extract::{Path, Query, ValidatedJson},
        model::discipline::RankedAthlete,
        service::discipline::DisciplineService,
        state::AppState,
        util::url::avatar_url,
    },
};

/// Tag for grouping discipline endpoints in OpenAPI documentation
pub static DISCIPLINE_TAG: &str = "discipline";

const DEFAULT_RANKINGS_LIMIT: u64 = 20;

fn ranked_dto(headers: &HeaderMap, ranked: RankedAthlete) -> DisciplineAthleteDto {
    let url = avatar_url(headers, &ranked.athlete.code);
    ranked.into_dto(url)
}

fn ranked_dtos(headers: &HeaderMap, ranked: Vec<RankedAthlete>) -> Vec<DisciplineAthleteDto> {
    ranked.into_iter().map(|r| ranked_dto(headers, r)).collect()
}

/// Create a discipline for an individual sport.
///
/// # Returns
/// - `201 Created` - The created discipline
/// - `400 Bad Request` - Invalid data or the sport is a team sport
/// - `404 Not Found` - Unknown sport
/// - `409 Conflict` - Code already used within the sport
#[utoipa::path(
    post,
    path = "/api/disciplines",
    tag = DISCIPLINE_TAG,
    request_body = CreateDisciplineDto,
    responses(
        (status = 201, description = "Discipline created", body = ApiResponse<DisciplineDto>),
        (status = 400, description = "Invalid discipline data", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Duplicate discipline code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discipline(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDisciplineDto>,
) -> Result<impl IntoResponse, AppError> {
    let discipline = DisciplineService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Discipline created successfully",
            discipline.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/disciplines",
    tag = DISCIPLINE_TAG,
    responses(
        (status = 200, description = "All disciplines", body = ApiResponse<Vec<DisciplineDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_disciplines(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let disciplines = DisciplineService::new(&state.db).get_all().await?;
    let dtos: Vec<DisciplineDto> = disciplines.into_iter().map(|d| d.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Disciplines retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/{id}",
    tag = DISCIPLINE_TAG,
    params(("id" = i32, Path, description = "Discipline ID")),
    responses(
        (status = 200, description = "The discipline", body = ApiResponse<DisciplineDto>),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discipline(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let discipline = DisciplineService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline retrieved successfully",
            discipline.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/disciplines/sport/{id}",
    tag = DISCIPLINE_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Disciplines of the sport", body = ApiResponse<Vec<DisciplineDto>>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_disciplines_by_sport(
    State(state): State<AppState>,
    Path(sport_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let disciplines = DisciplineService::new(&state.db)
        .get_by_sport(sport_id)
        .await?;
    let dtos: Vec<DisciplineDto> = disciplines.into_iter().map(|d| d.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Disciplines retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/disciplines/{id}",
    tag = DISCIPLINE_TAG,
    params(("id" = i32, Path, description = "Discipline ID")),
    request_body = UpdateDisciplineDto,
    responses(
        (status = 200, description = "Discipline updated", body = ApiResponse<DisciplineDto>),
        (status = 400, description = "Invalid discipline data", body = ErrorDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_discipline(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDisciplineDto>,
) -> Result<impl IntoResponse, AppError> {
    let discipline = DisciplineService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline updated successfully",
            discipline.into_dto(),
        )),
    ))
}

/// Delete a discipline without recorded performances.
#[utoipa::path(
    delete,
    path = "/api/disciplines/{id}",
    tag = DISCIPLINE_TAG,
    params(("id" = i32, Path, description = "Discipline ID")),
    responses(
        (status = 200, description = "Discipline deleted", body = MessageDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 409, description = "Performances reference the discipline", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_discipline(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DisciplineService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Discipline deleted successfully")),
    ))
}

/// Get every athlete registered for a discipline with their current rank.
#[utoipa::path(
    get,
    path = "/api/disciplines/{id}/athletes",
    tag = DISCIPLINE_TAG,
    params(("id" = i32, Path, description = "Discipline ID")),
    responses(
        (status = 200, description = "Registered athletes", body = ApiResponse<Vec<DisciplineAthleteDto>>),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discipline_athletes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let athletes = DisciplineService::new(&state.db).get_athletes(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline athletes retrieved successfully",
            ranked_dtos(&headers, athletes),
        )),
    ))
}

/// Register an athlete for a discipline.
///
/// # Returns
/// - `201 Created` - The registration with the athlete
/// - `400 Bad Request` - The athlete plays a team sport
/// - `404 Not Found` - Unknown discipline or athlete
/// - `409 Conflict` - Already registered
#[utoipa::path(
    post,
    path = "/api/disciplines/athletes",
    tag = DISCIPLINE_TAG,
    request_body = AddDisciplineAthleteDto,
    responses(
        (status = 201, description = "Athlete registered", body = ApiResponse<DisciplineAthleteDto>),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 404, description = "Discipline or athlete not found", body = ErrorDto),
        (status = 409, description = "Athlete already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_discipline_athlete(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<AddDisciplineAthleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let ranked = DisciplineService::new(&state.db).add_athlete(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Athlete added to discipline successfully",
            ranked_dto(&headers, ranked),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/disciplines/{id}/athletes/{athlete_id}",
    tag = DISCIPLINE_TAG,
    params(
        ("id" = i32, Path, description = "Discipline ID"),
        ("athlete_id" = i32, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete removed from the discipline", body = MessageDto),
        (status = 404, description = "Athlete is not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_discipline_athlete(
    State(state): State<AppState>,
    Path((id, athlete_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    DisciplineService::new(&state.db)
        .remove_athlete(id, athlete_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Athlete removed from discipline successfully")),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/disciplines/{id}/athletes/{athlete_id}/rank",
    tag = DISCIPLINE_TAG,
    params(
        ("id" = i32, Path, description = "Discipline ID"),
        ("athlete_id" = i32, Path, description = "Athlete ID")
    ),
    request_body = UpdateDisciplineRankDto,
    responses(
        (status = 200, description = "Rank updated", body = ApiResponse<DisciplineAthleteDto>),
        (status = 400, description = "Invalid rank", body = ErrorDto),
        (status = 404, description = "Athlete is not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_discipline_athlete_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, athlete_id)): Path<(i32, i32)>,
    ValidatedJson(payload): ValidatedJson<UpdateDisciplineRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let ranked = DisciplineService::new(&state.db)
        .update_rank(id, athlete_id, payload.current_rank)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete rank updated successfully",
            ranked_dto(&headers, ranked),
        )),
    ))
}

/// Get the ranked athletes of a discipline by ascending rank.
#[utoipa::path(
    get,
    path = "/api/disciplines/{id}/rankings",
    tag = DISCIPLINE_TAG,
    params(
        ("id" = i32, Path, description = "Discipline ID"),
        LimitParam
    ),
    responses(
        (status = 200, description = "Ranked athletes", body = ApiResponse<Vec<DisciplineAthleteDto>>),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discipline_rankings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit_or(DEFAULT_RANKINGS_LIMIT)?;
    let rankings = DisciplineService::new(&state.db)
        .get_rankings(id, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline rankings retrieved successfully",
            ranked_dtos(&headers, rankings),
        )),
    ))
}
