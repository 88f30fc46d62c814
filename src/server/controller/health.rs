use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/main/healthcheck",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn healthcheck() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            hello: "world!".to_string(),
        }),
    )
}
