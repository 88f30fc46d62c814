use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        venue::{CreateVenueDto, UpdateVenueDto, VenueDto},
    },
    server::{
        error::AppError,
        middleware::extract::{Path, ValidatedJson},
        service::venue::VenueService,
        state::AppState,
    },
};

/// Tag for grouping venue endpoints in OpenAPI documentation
pub static VENUE_TAG: &str = "venue";

#[utoipa::path(
    post,
    path = "/api/venues",
    tag = VENUE_TAG,
    request_body = CreateVenueDto,
    responses(
        (status = 201, description = "Venue created", body = ApiResponse<VenueDto>),
        (status = 400, description = "Invalid venue data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Venue created successfully", venue.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/venues",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "All venues", body = ApiResponse<Vec<VenueDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venues = VenueService::new(&state.db).get_all().await?;
    let dtos: Vec<VenueDto> = venues.into_iter().map(|v| v.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Venues retrieved successfully", dtos)),
    ))
}

/// Get the venues flagged as home venues.
#[utoipa::path(
    get,
    path = "/api/venues/home",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "Home venues", body = ApiResponse<Vec<VenueDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_home_venues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venues = VenueService::new(&state.db).get_home().await?;
    let dtos: Vec<VenueDto> = venues.into_iter().map(|v| v.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Home venues retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "The venue", body = ApiResponse<VenueDto>),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Venue retrieved successfully", venue.into_dto())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = UpdateVenueDto,
    responses(
        (status = 200, description = "Venue updated", body = ApiResponse<VenueDto>),
        (status = 400, description = "Invalid venue data", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Venue updated successfully", venue.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue deleted", body = MessageDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 409, description = "Events take place at the venue", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VenueService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Venue deleted successfully"))))
}
