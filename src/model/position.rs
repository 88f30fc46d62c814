use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePositionDto {
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePositionDto {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}
