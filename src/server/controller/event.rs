use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto, UpdateEventStatusDto},
        sport::SportType,
    },
    server::{
        controller::param::LimitParam,
        error::AppError,
        middleware::extract::{Path, Query, ValidatedJson},
        model::event::Event,
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

const DEFAULT_UPCOMING_LIMIT: u64 = 10;

fn into_dtos(events: Vec<Event>) -> Vec<EventDto> {
    events.into_iter().map(|e| e.into_dto()).collect()
}

fn list_response(events: Vec<Event>) -> (StatusCode, Json<ApiResponse<Vec<EventDto>>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::new(
            "Events retrieved successfully",
            into_dtos(events),
        )),
    )
}

/// Create an event.
///
/// The gameday must belong to the given season. The year defaults to the start date's
/// year and the status to `SCHEDULED`.
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Invalid data, end before start or gameday of another season
/// - `404 Not Found` - Unknown sport, season, gameday or venue
/// - `409 Conflict` - Event code already in use
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<EventDto>),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 409, description = "Event code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Event created successfully", event.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok(list_response(events))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = ApiResponse<EventDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Event retrieved successfully", event.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/events/sport/{sport_type}",
    tag = EVENT_TAG,
    params(("sport_type" = SportType, Path, description = "Sport name, e.g. FOOTBALL")),
    responses(
        (status = 200, description = "Events of the sport", body = ApiResponse<Vec<EventDto>>),
        (status = 400, description = "Unknown sport name", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_sport(
    State(state): State<AppState>,
    Path(sport_type): Path<SportType>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_by_sport(sport_type).await?;

    Ok(list_response(events))
}

#[utoipa::path(
    get,
    path = "/api/events/season/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Events of the season", body = ApiResponse<Vec<EventDto>>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_by_season(season_id).await?;

    Ok(list_response(events))
}

#[utoipa::path(
    get,
    path = "/api/events/gameday/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    responses(
        (status = 200, description = "Events of the gameday", body = ApiResponse<Vec<EventDto>>),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_gameday(
    State(state): State<AppState>,
    Path(gameday_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_by_gameday(gameday_id)
        .await?;

    Ok(list_response(events))
}

/// Get scheduled events by ascending start date.
#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    tag = EVENT_TAG,
    params(LimitParam),
    responses(
        (status = 200, description = "Upcoming events", body = ApiResponse<Vec<EventDto>>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_events(
    State(state): State<AppState>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit_or(DEFAULT_UPCOMING_LIMIT)?;
    let events = EventService::new(&state.db).get_upcoming(limit).await?;

    Ok(list_response(events))
}

/// Get the events that are currently live.
#[utoipa::path(
    get,
    path = "/api/events/active",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Live events", body = ApiResponse<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_active().await?;

    Ok(list_response(events))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = ApiResponse<EventDto>),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event or venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Event updated successfully", event.into_dto())),
    ))
}

/// Move an event to another status.
///
/// Setting the current status again is accepted and changes nothing.
///
/// # Returns
/// - `200 OK` - The event with its new status
/// - `400 Bad Request` - The transition is not allowed
/// - `404 Not Found` - Unknown event
#[utoipa::path(
    patch,
    path = "/api/events/{id}/status",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<EventDto>),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEventStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Event status updated successfully",
            event.into_dto(),
        )),
    ))
}

/// Delete an event and its performances.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 400, description = "Event is live", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event deleted successfully"))))
}
