use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        position::{CreatePositionDto, PositionDto, UpdatePositionDto},
    },
    server::{
        error::AppError,
        middleware::extract::{Path, ValidatedJson},
        service::position::PositionService,
        state::AppState,
    },
};

/// Tag for grouping position endpoints in OpenAPI documentation
pub static POSITION_TAG: &str = "position";

fn into_dtos(positions: Vec<crate::server::model::position::Position>) -> Vec<PositionDto> {
    positions.into_iter().map(|p| p.into_dto()).collect()
}

/// Create a position for a team sport.
///
/// # Returns
/// - `201 Created` - The created position
/// - `400 Bad Request` - Invalid data or the sport is not a team sport
/// - `404 Not Found` - Unknown sport
/// - `409 Conflict` - Code already used within the sport
#[utoipa::path(
    post,
    path = "/api/positions",
    tag = POSITION_TAG,
    request_body = CreatePositionDto,
    responses(
        (status = 201, description = "Position created", body = ApiResponse<PositionDto>),
        (status = 400, description = "Invalid position data", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 409, description = "Duplicate position code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_position(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let position = PositionService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Position created successfully",
            position.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/positions",
    tag = POSITION_TAG,
    responses(
        (status = 200, description = "All positions", body = ApiResponse<Vec<PositionDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_positions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let positions = PositionService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Positions retrieved successfully",
            into_dtos(positions),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/positions/{id}",
    tag = POSITION_TAG,
    params(("id" = i32, Path, description = "Position ID")),
    responses(
        (status = 200, description = "The position", body = ApiResponse<PositionDto>),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let position = PositionService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Position retrieved successfully",
            position.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/positions/sport/{id}",
    tag = POSITION_TAG,
    params(("id" = i32, Path, description = "Sport ID")),
    responses(
        (status = 200, description = "Positions of the sport", body = ApiResponse<Vec<PositionDto>>),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_positions_by_sport(
    State(state): State<AppState>,
    Path(sport_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let positions = PositionService::new(&state.db)
        .get_by_sport(sport_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Positions retrieved successfully",
            into_dtos(positions),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/positions/{id}",
    tag = POSITION_TAG,
    params(("id" = i32, Path, description = "Position ID")),
    request_body = UpdatePositionDto,
    responses(
        (status = 200, description = "Position updated", body = ApiResponse<PositionDto>),
        (status = 400, description = "Invalid position data", body = ErrorDto),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 409, description = "Duplicate position code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let position = PositionService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Position updated successfully",
            position.into_dto(),
        )),
    ))
}

/// Delete a position no active athlete plays.
#[utoipa::path(
    delete,
    path = "/api/positions/{id}",
    tag = POSITION_TAG,
    params(("id" = i32, Path, description = "Position ID")),
    responses(
        (status = 200, description = "Position deleted", body = MessageDto),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 409, description = "Active athletes play this position", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PositionService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Position deleted successfully")),
    ))
}
