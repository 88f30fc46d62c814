use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PageDto, PaginationDto},
        performance::{
            AthletePerformanceSummaryDto, BulkPerformanceDto, ComparePerformancesDto,
            ComparisonDto, CreatePerformanceDto, DisciplineRecordsDto, LeaderboardEntryDto,
            PerformanceDto, TeamEventStatsDto, TrendDto, UpdatePerformanceDto,
        },
        sport::SportType,
    },
    server::{
        controller::param::{
            DisciplineFilterParam, LimitParam, PerformanceListParam, SeasonParam,
            TimeframeParam,
        },
        error::AppError,
        middleware::extract::{Path, Query, Validate, ValidatedJson},
        model::performance::Performance,
        service::performance::PerformanceService,
        state::AppState,
    },
};

/// Tag for grouping performance endpoints in OpenAPI documentation
pub static PERFORMANCE_TAG: &str = "performance";

const DEFAULT_TOP_LIMIT: u64 = 10;
const DEFAULT_SPORT_LIMIT: u64 = 50;

fn into_dtos(performances: Vec<Performance>) -> Vec<PerformanceDto> {
    performances.into_iter().map(|p| p.into_dto()).collect()
}

fn list_response(
    message: &str,
    performances: Vec<Performance>,
) -> (StatusCode, Json<ApiResponse<Vec<PerformanceDto>>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::new(message, into_dtos(performances))),
    )
}

/// List performances.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination, ordering and filter parameters
///
/// # Returns
/// - `200 OK` - Page of performances with pagination metadata
/// - `400 Bad Request` - Page or limit out of range
#[utoipa::path(
    get,
    path = "/api/performances",
    tag = PERFORMANCE_TAG,
    params(PerformanceListParam),
    responses(
        (status = 200, description = "Page of performances", body = ApiResponse<PageDto<PerformanceDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_performances(
    State(state): State<AppState>,
    Query(params): Query<PerformanceListParam>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let (performances, total) = PerformanceService::new(&state.db)
        .get_paginated(&params.filter(), params.page, params.limit)
        .await?;

    let page = PageDto {
        items: into_dtos(performances),
        pagination: PaginationDto::new(params.page, params.limit, total),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Performances retrieved successfully", page)),
    ))
}

/// Record a performance.
///
/// The row is validated against the rules of the event's sport, and the personal and
/// season best flags are updated in the same transaction as the insert.
///
/// # Returns
/// - `201 Created` - The stored performance with its best flags
/// - `400 Bad Request` - Inactive athlete, event not accepting results, discipline
///   mismatch or metrics failing the sport's rules
/// - `404 Not Found` - Unknown athlete, event or discipline
/// - `409 Conflict` - A result for this athlete, event and discipline already exists
#[utoipa::path(
    post,
    path = "/api/performances",
    tag = PERFORMANCE_TAG,
    request_body = CreatePerformanceDto,
    responses(
        (status = 201, description = "Performance recorded", body = ApiResponse<PerformanceDto>),
        (status = 400, description = "Invalid performance", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 409, description = "Duplicate performance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_performance(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePerformanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let performance = PerformanceService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Performance recorded successfully",
            performance.into_dto(),
        )),
    ))
}

/// Record several performances at once.
///
/// Rows are validated and stored in submission order inside one transaction; a single
/// failing row rejects the whole batch.
#[utoipa::path(
    post,
    path = "/api/performances/bulk",
    tag = PERFORMANCE_TAG,
    request_body = BulkPerformanceDto,
    responses(
        (status = 201, description = "Performances recorded", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 400, description = "A row is invalid", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 409, description = "Duplicate performance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bulk_performances(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BulkPerformanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let performances = PerformanceService::new(&state.db)
        .create_bulk(payload)
        .await?;
    let message = format!("{} performances recorded successfully", performances.len());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(message, into_dtos(performances))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/{id}",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Performance ID")),
    responses(
        (status = 200, description = "The performance", body = ApiResponse<PerformanceDto>),
        (status = 404, description = "Performance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_performance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let performance = PerformanceService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Performance retrieved successfully",
            performance.into_dto(),
        )),
    ))
}

/// Update a performance.
///
/// Results of finished events only accept note changes. Changed metrics are checked
/// against the merged row and the best flags of the athlete's discipline are
/// re-evaluated.
#[utoipa::path(
    put,
    path = "/api/performances/{id}",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Performance ID")),
    request_body = UpdatePerformanceDto,
    responses(
        (status = 200, description = "Performance updated", body = ApiResponse<PerformanceDto>),
        (status = 400, description = "Invalid update or finished event", body = ErrorDto),
        (status = 404, description = "Performance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_performance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePerformanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let performance = PerformanceService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Performance updated successfully",
            performance.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/performances/{id}",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Performance ID")),
    responses(
        (status = 200, description = "Performance deleted", body = MessageDto),
        (status = 400, description = "The event is finished", body = ErrorDto),
        (status = 404, description = "Performance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_performance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PerformanceService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Performance deleted successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/athlete/{id}",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Athlete ID")),
    responses(
        (status = 200, description = "Performances of the athlete", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete_performances(
    State(state): State<AppState>,
    Path(athlete_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let performances = PerformanceService::new(&state.db)
        .get_by_athlete(athlete_id)
        .await?;

    Ok(list_response(
        "Athlete performances retrieved successfully",
        performances,
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/athlete/{id}/personal-bests",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Athlete ID"), DisciplineFilterParam),
    responses(
        (status = 200, description = "Personal-best rows", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 404, description = "Athlete not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_personal_bests(
    State(state): State<AppState>,
    Path(athlete_id): Path<i32>,
    Query(params): Query<DisciplineFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let performances = PerformanceService::new(&state.db)
        .get_personal_bests(athlete_id, params.discipline_id)
        .await?;

    Ok(list_response(
        "Personal bests retrieved successfully",
        performances,
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/athlete/{id}/season/{season_id}/bests",
    tag = PERFORMANCE_TAG,
    params(
        ("id" = i32, Path, description = "Athlete ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Season-best rows", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 404, description = "Athlete or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_bests(
    State(state): State<AppState>,
    Path((athlete_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let performances = PerformanceService::new(&state.db)
        .get_season_bests(athlete_id, season_id)
        .await?;

    Ok(list_response(
        "Season bests retrieved successfully",
        performances,
    ))
}

/// Summarize an athlete's performances, optionally within one season.
#[utoipa::path(
    get,
    path = "/api/performances/athlete/{id}/summary",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Athlete ID"), SeasonParam),
    responses(
        (status = 200, description = "Totals and per-discipline breakdown", body = ApiResponse<AthletePerformanceSummaryDto>),
        (status = 404, description = "Athlete or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_athlete_summary(
    State(state): State<AppState>,
    Path(athlete_id): Path<i32>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    let summary = PerformanceService::new(&state.db)
        .get_athlete_summary(athlete_id, params.season_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Athlete summary retrieved successfully",
            summary,
        )),
    ))
}

/// Classify how an athlete's results in a discipline develop over time.
#[utoipa::path(
    get,
    path = "/api/performances/athlete/{id}/discipline/{discipline_id}/trends",
    tag = PERFORMANCE_TAG,
    params(
        ("id" = i32, Path, description = "Athlete ID"),
        ("discipline_id" = i32, Path, description = "Discipline ID"),
        TimeframeParam
    ),
    responses(
        (status = 200, description = "Trend of the comparable metric", body = ApiResponse<TrendDto>),
        (status = 404, description = "Athlete or discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trends(
    State(state): State<AppState>,
    Path((athlete_id, discipline_id)): Path<(i32, i32)>,
    Query(params): Query<TimeframeParam>,
) -> Result<impl IntoResponse, AppError> {
    let trend = PerformanceService::new(&state.db)
        .get_trends(athlete_id, discipline_id, params.timeframe)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Performance trends retrieved successfully", trend)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/event/{id}/results",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Results by position then points", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_results(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let performances = PerformanceService::new(&state.db)
        .get_event_results(event_id)
        .await?;

    Ok(list_response(
        "Event results retrieved successfully",
        performances,
    ))
}

/// Get the leaderboard of a discipline.
///
/// Ordering follows the discipline's unit: fastest time, longest distance or highest
/// mark, otherwise best finishing position.
#[utoipa::path(
    get,
    path = "/api/performances/discipline/{id}/top",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Discipline ID"), LimitParam, SeasonParam),
    responses(
        (status = 200, description = "Leaderboard entries", body = ApiResponse<Vec<LeaderboardEntryDto>>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_performances(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
    Query(limit): Query<LimitParam>,
    Query(season): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    let limit = limit.limit_or(DEFAULT_TOP_LIMIT)?;
    let entries = PerformanceService::new(&state.db)
        .get_top(discipline_id, limit, season.season_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Top performances retrieved successfully",
            entries,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/discipline/{id}/records",
    tag = PERFORMANCE_TAG,
    params(("id" = i32, Path, description = "Discipline ID"), SeasonParam),
    responses(
        (status = 200, description = "Record and top ten", body = ApiResponse<DisciplineRecordsDto>),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discipline_records(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
    Query(params): Query<SeasonParam>,
) -> Result<impl IntoResponse, AppError> {
    let records = PerformanceService::new(&state.db)
        .get_records(discipline_id, params.season_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Discipline records retrieved successfully",
            records,
        )),
    ))
}

/// Get per-athlete rows and totals of a team in one event.
#[utoipa::path(
    get,
    path = "/api/performances/team/{team_code}/event/{event_id}/stats",
    tag = PERFORMANCE_TAG,
    params(
        ("team_code" = String, Path, description = "Team code"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Team statistics for the event", body = ApiResponse<TeamEventStatsDto>),
        (status = 400, description = "The event belongs to another sport", body = ErrorDto),
        (status = 404, description = "Team or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_event_stats(
    State(state): State<AppState>,
    Path((team_code, event_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let stats = PerformanceService::new(&state.db)
        .get_team_event_stats(team_code.trim(), event_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Team event statistics retrieved successfully",
            stats,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/performances/sport/{sport_type}",
    tag = PERFORMANCE_TAG,
    params(
        ("sport_type" = SportType, Path, description = "Sport name, e.g. BOXING"),
        LimitParam
    ),
    responses(
        (status = 200, description = "Most recent performances of the sport", body = ApiResponse<Vec<PerformanceDto>>),
        (status = 400, description = "Unknown sport name or invalid limit", body = ErrorDto),
        (status = 404, description = "Sport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sport_performances(
    State(state): State<AppState>,
    Path(sport_type): Path<SportType>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit_or(DEFAULT_SPORT_LIMIT)?;
    let performances = PerformanceService::new(&state.db)
        .get_by_sport(sport_type, limit)
        .await?;

    Ok(list_response(
        "Sport performances retrieved successfully",
        performances,
    ))
}

/// Compare several athletes in one discipline.
#[utoipa::path(
    post,
    path = "/api/performances/compare",
    tag = PERFORMANCE_TAG,
    request_body = ComparePerformancesDto,
    responses(
        (status = 200, description = "Per-athlete comparison", body = ApiResponse<ComparisonDto>),
        (status = 400, description = "Fewer than two athletes", body = ErrorDto),
        (status = 404, description = "Athlete or discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare_performances(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ComparePerformancesDto>,
) -> Result<impl IntoResponse, AppError> {
    let comparison = PerformanceService::new(&state.db).compare(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Performance comparison completed successfully",
            comparison,
        )),
    ))
}
