use axum::{middleware, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        ai, athlete, discipline, event, gameday, health, performance, position, season, sport,
        team, venue,
    },
    error::AppError,
    middleware::logging::log_request,
    startup::setup_cors,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Varsity API", description = "University sports management backend"),
    tags(
        (name = "sport", description = "Sports and their reference data"),
        (name = "position", description = "Team-sport positions"),
        (name = "discipline", description = "Individual-sport disciplines and registrations"),
        (name = "team", description = "Teams and rosters"),
        (name = "athlete", description = "Athlete profiles"),
        (name = "season", description = "Seasons"),
        (name = "gameday", description = "Gamedays within a season"),
        (name = "venue", description = "Venues"),
        (name = "event", description = "Events and their status"),
        (name = "performance", description = "Results, bests, leaderboards and statistics"),
        (name = "ai", description = "Assistant chat"),
        (name = "health", description = "Liveness"),
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Mounts every API endpoint, the Swagger UI at `/swagger-ui`, the avatar directory at
/// `/avatars`, and wraps everything in request logging and CORS.
pub fn router(config: &Config) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::healthcheck))
        // Sports
        .routes(routes!(sport::create_sport, sport::get_sports))
        .routes(routes!(
            sport::get_sport,
            sport::update_sport,
            sport::delete_sport
        ))
        .routes(routes!(sport::get_sport_stats))
        // Positions
        .routes(routes!(position::create_position, position::get_positions))
        .routes(routes!(
            position::get_position,
            position::update_position,
            position::delete_position
        ))
        .routes(routes!(position::get_positions_by_sport))
        // Disciplines
        .routes(routes!(
            discipline::create_discipline,
            discipline::get_disciplines
        ))
        .routes(routes!(
            discipline::get_discipline,
            discipline::update_discipline,
            discipline::delete_discipline
        ))
        .routes(routes!(discipline::get_disciplines_by_sport))
        .routes(routes!(discipline::add_discipline_athlete))
        .routes(routes!(discipline::get_discipline_athletes))
        .routes(routes!(discipline::remove_discipline_athlete))
        .routes(routes!(discipline::update_discipline_athlete_rank))
        .routes(routes!(discipline::get_discipline_rankings))
        // Teams
        .routes(routes!(team::create_team, team::get_teams))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::get_teams_by_sport))
        .routes(routes!(team::get_team_roster))
        .routes(routes!(team::remove_team_member))
        // Athletes
        .routes(routes!(athlete::get_athletes))
        .routes(routes!(
            athlete::get_athlete,
            athlete::update_athlete,
            athlete::delete_athlete
        ))
        .routes(routes!(athlete::get_athlete_by_code))
        .routes(routes!(athlete::get_athletes_by_team))
        .routes(routes!(athlete::get_athletes_by_position))
        .routes(routes!(athlete::get_athletes_by_sport))
        .routes(routes!(athlete::get_athletes_by_discipline))
        .routes(routes!(athlete::create_team_athlete))
        .routes(routes!(athlete::create_individual_athlete))
        .routes(routes!(athlete::update_athlete_rank))
        .routes(routes!(athlete::add_athlete_discipline))
        .routes(routes!(athlete::remove_athlete_discipline))
        .routes(routes!(athlete::get_athlete_stats))
        .routes(routes!(athlete::get_athlete_season_summary))
        // Seasons
        .routes(routes!(season::create_season, season::get_seasons))
        .routes(routes!(season::get_active_season))
        .routes(routes!(season::get_seasons_by_year))
        .routes(routes!(
            season::get_season,
            season::update_season,
            season::delete_season
        ))
        .routes(routes!(season::activate_season))
        .routes(routes!(season::get_season_stats))
        // Gamedays
        .routes(routes!(gameday::create_gameday, gameday::get_gamedays))
        .routes(routes!(gameday::get_current_gameday))
        .routes(routes!(gameday::get_next_gameday))
        .routes(routes!(gameday::get_previous_gameday))
        .routes(routes!(gameday::get_gamedays_by_season))
        .routes(routes!(
            gameday::get_gameday,
            gameday::update_gameday,
            gameday::delete_gameday
        ))
        .routes(routes!(gameday::set_current_gameday))
        .routes(routes!(gameday::finish_gameday))
        // Venues
        .routes(routes!(venue::create_venue, venue::get_venues))
        .routes(routes!(venue::get_home_venues))
        .routes(routes!(
            venue::get_venue,
            venue::update_venue,
            venue::delete_venue
        ))
        // Events
        .routes(routes!(event::create_event, event::get_events))
        .routes(routes!(event::get_upcoming_events))
        .routes(routes!(event::get_active_events))
        .routes(routes!(event::get_events_by_sport))
        .routes(routes!(event::get_events_by_season))
        .routes(routes!(event::get_events_by_gameday))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::update_event_status))
        // Performances
        .routes(routes!(
            performance::create_performance,
            performance::get_performances
        ))
        .routes(routes!(performance::create_bulk_performances))
        .routes(routes!(performance::compare_performances))
        .routes(routes!(
            performance::get_performance,
            performance::update_performance,
            performance::delete_performance
        ))
        .routes(routes!(performance::get_athlete_performances))
        .routes(routes!(performance::get_personal_bests))
        .routes(routes!(performance::get_season_bests))
        .routes(routes!(performance::get_athlete_summary))
        .routes(routes!(performance::get_trends))
        .routes(routes!(performance::get_event_results))
        .routes(routes!(performance::get_top_performances))
        .routes(routes!(performance::get_discipline_records))
        .routes(routes!(performance::get_team_event_stats))
        .routes(routes!(performance::get_sport_performances))
        // AI
        .routes(routes!(ai::chat))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .nest_service("/avatars", ServeDir::new(&config.avatar_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .layer(setup_cors(config))
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
