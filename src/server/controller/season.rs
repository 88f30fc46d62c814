use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        season::{CreateSeasonDto, SeasonDto, SeasonStatsDto, UpdateSeasonDto},
    },
    server::{
        error::AppError,
        middleware::extract::{Path, ValidatedJson},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

/// Create a season.
///
/// Creating an active season deactivates every other season in the same transaction.
///
/// # Returns
/// - `201 Created` - The created season
/// - `400 Bad Request` - Invalid data or end year before start year
#[utoipa::path(
    post,
    path = "/api/seasons",
    tag = SEASON_TAG,
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Season created", body = ApiResponse<SeasonDto>),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Season created successfully", season.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "All seasons", body = ApiResponse<Vec<SeasonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_all().await?;
    let dtos: Vec<SeasonDto> = seasons.into_iter().map(|s| s.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Seasons retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons/active",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "The active season", body = ApiResponse<SeasonDto>),
        (status = 404, description = "No active season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_season(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_active().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Active season retrieved successfully",
            season.into_dto(),
        )),
    ))
}

/// Get the seasons starting or ending in a year.
#[utoipa::path(
    get,
    path = "/api/seasons/year/{year}",
    tag = SEASON_TAG,
    params(("year" = i32, Path, description = "Start or end year")),
    responses(
        (status = 200, description = "Seasons of the year", body = ApiResponse<Vec<SeasonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_by_year(year).await?;
    let dtos: Vec<SeasonDto> = seasons.into_iter().map(|s| s.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Seasons retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "The season", body = ApiResponse<SeasonDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Season retrieved successfully", season.into_dto())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    request_body = UpdateSeasonDto,
    responses(
        (status = 200, description = "Season updated", body = ApiResponse<SeasonDto>),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Season updated successfully", season.into_dto())),
    ))
}

/// Make a season the only active one.
#[utoipa::path(
    patch,
    path = "/api/seasons/{id}/activate",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Season activated", body = ApiResponse<SeasonDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).activate(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Season activated successfully", season.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Season deleted", body = MessageDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 409, description = "Events reference the season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SeasonService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Season deleted successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}/stats",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Season record counts", body = ApiResponse<SeasonStatsDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stats = SeasonService::new(&state.db).stats(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Season statistics retrieved successfully", stats)),
    ))
}
