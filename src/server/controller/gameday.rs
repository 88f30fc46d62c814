use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        gameday::{CreateGamedayDto, GamedayDto, UpdateGamedayDto},
    },
    server::{
        controller::param::SeasonParam,
        error::AppError,
        middleware::extract::{Path, Query, ValidatedJson},
        model::gameday::GamedaySlot,
        service::gameday::GamedayService,
        state::AppState,
    },
};

/// Tag for grouping gameday endpoints in OpenAPI documentation
pub static GAMEDAY_TAG: &str = "gameday";

/// Create a gameday within a season.
///
/// Without explicit flags the new gameday is marked as the next one.
///
/// # Returns
/// - `201 Created` - The created gameday
/// - `400 Bad Request` - Invalid gameday data
/// - `404 Not Found` - Unknown season
#[utoipa::path(
    post,
    path = "/api/gamedays",
    tag = GAMEDAY_TAG,
    request_body = CreateGamedayDto,
    responses(
        (status = 201, description = "Gameday created", body = ApiResponse<GamedayDto>),
        (status = 400, description = "Invalid gameday data", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gameday(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGamedayDto>,
) -> Result<impl IntoResponse, AppError> {
    let gameday = GamedayService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Gameday created successfully",
            gameday.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gamedays",
    tag = GAMEDAY_TAG,
    responses(
        (status = 200, description = "All gamedays", body = ApiResponse<Vec<GamedayDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gamedays(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gamedays = GamedayService::new(&state.db).get_all().await?;
    let dtos: Vec<GamedayDto> = gamedays.into_iter().map(|g| g.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Gamedays retrieved successfully", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gamedays/{id}",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    responses(
        (status = 200, description = "The gameday", body = ApiResponse<GamedayDto>),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gameday(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gameday = GamedayService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Gameday retrieved successfully",
            gameday.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gamedays/season/{id}",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Gamedays of the season", body = ApiResponse<Vec<GamedayDto>>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gamedays_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gamedays = GamedayService::new(&state.db)
        .get_by_season(season_id)
        .await?;
    let dtos: Vec<GamedayDto> = gamedays.into_iter().map(|g| g.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Gamedays retrieved successfully", dtos)),
    ))
}

async fn slot_response(
    state: AppState,
    slot: GamedaySlot,
    season_id: Option<i32>,
) -> Result<(StatusCode, Json<ApiResponse<GamedayDto>>), AppError> {
    let gameday = GamedayService::new(&state.db)
        .get_slot(slot, season_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("{} gameday retrieved successfully", slot.label()),
            gameday.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gamedays/current",
    tag = GAMEDAY_TAG,
    params(SeasonParam),
    responses(
        (status = 200, description = "The current gameday", body = ApiResponse<GamedayDto>),
        (status = 404, description = "No current gameday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_gameday(
    State(state): State<AppState>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    slot_response(state, GamedaySlot::Current, params.season_id).await
}

#[utoipa::path(
    get,
    path = "/api/gamedays/next",
    tag = GAMEDAY_TAG,
    params(SeasonParam),
    responses(
        (status = 200, description = "The next gameday", body = ApiResponse<GamedayDto>),
        (status = 404, description = "No next gameday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_next_gameday(
    State(state): State<AppState>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    slot_response(state, GamedaySlot::Next, params.season_id).await
}

#[utoipa::path(
    get,
    path = "/api/gamedays/previous",
    tag = GAMEDAY_TAG,
    params(SeasonParam),
    responses(
        (status = 200, description = "The previous gameday", body = ApiResponse<GamedayDto>),
        (status = 404, description = "No previous gameday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_previous_gameday(
    State(state): State<AppState>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    slot_response(state, GamedaySlot::Previous, params.season_id).await
}

#[utoipa::path(
    put,
    path = "/api/gamedays/{id}",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    request_body = UpdateGamedayDto,
    responses(
        (status = 200, description = "Gameday updated", body = ApiResponse<GamedayDto>),
        (status = 400, description = "Invalid gameday data", body = ErrorDto),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gameday(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateGamedayDto>,
) -> Result<impl IntoResponse, AppError> {
    let gameday = GamedayService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Gameday updated successfully",
            gameday.into_dto(),
        )),
    ))
}

/// Make a gameday the current one of its season.
///
/// Clears the current flag of every other gameday in the season and the target's next
/// flag in one transaction.
#[utoipa::path(
    patch,
    path = "/api/gamedays/{id}/set-current",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    responses(
        (status = 200, description = "Gameday is now current", body = ApiResponse<GamedayDto>),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_current_gameday(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gameday = GamedayService::new(&state.db).set_current(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Gameday set as current successfully",
            gameday.into_dto(),
        )),
    ))
}

/// Mark a gameday as finished and make it the previous one of its season.
#[utoipa::path(
    patch,
    path = "/api/gamedays/{id}/finish",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    responses(
        (status = 200, description = "Gameday finished", body = ApiResponse<GamedayDto>),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finish_gameday(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gameday = GamedayService::new(&state.db).finish(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Gameday finished successfully",
            gameday.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/gamedays/{id}",
    tag = GAMEDAY_TAG,
    params(("id" = i32, Path, description = "Gameday ID")),
    responses(
        (status = 200, description = "Gameday deleted", body = MessageDto),
        (status = 404, description = "Gameday not found", body = ErrorDto),
        (status = 409, description = "Events reference the gameday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gameday(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GamedayService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Gameday deleted successfully")),
    ))
}
