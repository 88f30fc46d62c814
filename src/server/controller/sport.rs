use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        sport::{CreateSportDto, SportDetailDto, SportDto, SportStatsDto, UpdateSportDto},
    },
    server::{
        error::AppError,
        middleware::extract::{Path, ValidatedJson},
        service::sport::SportService,
        state::AppState,
    },
};

/// Tag for grouping sport endpoints in OpenAPI documentation
pub static SPORT_TAG: &str = "sport";

/// Create a new sport.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Sport name and whether it is played by teams
///
/// # Returns
/// - `201 Created` - The created sport
/// - `400 Bad Request` - Unknown sport name
/// - `409 Conflict` - The sport already exists
#[utoipa::path(
    post,
    path = "/api/sports",
    tag = SPORT_TAG,
    request_body = CreateSportDto,
    responses(
        (status = 201, description = "Sport created", body = ApiResponse<SportDto>),
        (status = 400, description = "Invalid sport data", body = ErrorDto),
        (status = 409, description = "Sport already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sport(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSportDto>,
) -> Result<impl IntoResponse, AppError> {
    let sport = SportService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Sport created successfully", sport.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/sports",
    tag = SPORT_TAG,
    responses(
        (status = 200, description = "All sports", body = ApiResponse<Vec<SportDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sports = SportService::new(&state.db).get_all().await?;
    let dtos: Vec<SportDto> = sports.into_iter().map(|s| s.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Sports retrieved successfully", dtos)),
    ))
}

/// Get a sport with its positions and disciplines.
#[utoipa::path(
    get,
    path = "/api/sports/{id}",
    tag = SPORT_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Sport with positions and disciplines", body = ApiResponse<SportDetailDto>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sport = SportService::new(&state.db).get_detail(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Sport retrieved successfully", sport)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/sports/{id}",
    tag = SPORT_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    request_body = UpdateSportDto,
    responses(
        (status = 200, description = "Sport updated", body = ApiResponse<SportDto>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Another sport already has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSportDto>,
) -> Result<impl IntoResponse, AppError> {
    let sport = SportService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Sport updated successfully", sport.into_dto())),
    ))
}

/// Delete a sport.
///
/// Refused while teams, positions, disciplines or events still reference the sport.
///
/// # Returns
/// - `200 OK` - Sport deleted
/// - `404 Not Found` - No sport with that ID
/// - `409 Conflict` - Dependent records exist
#[utoipa::path(
    delete,
    path = "/api/sports/{id}",
    tag = SPORT_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Sport deleted", body = MessageDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Sport still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SportService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Sport deleted successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/sports/{id}/stats",
    tag = SPORT_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Record counts for the sport", body = ApiResponse<SportStatsDto>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sport_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stats = SportService::new(&state.db).stats(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Sport statistics retrieved successfully", stats)),
    ))
}
