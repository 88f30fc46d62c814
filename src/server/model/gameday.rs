use chrono::{DateTime, Utc};

use crate::{
    model::gameday::{CreateGamedayDto, GamedayDto, UpdateGamedayDto},
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Gameday {
    pub id: i32,
    pub name: String,
    pub game_number: Option<i32>,
    pub season_id: i32,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub finished: bool,
    pub is_previous: bool,
    pub is_current: bool,
    pub is_next: bool,
}

impl Gameday {
    pub fn from_entity(entity: entity::gameday::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game_number: entity.game_number,
            season_id: entity.season_id,
            scheduled_date: entity.scheduled_date,
            finished: entity.finished,
            is_previous: entity.is_previous,
            is_current: entity.is_current,
            is_next: entity.is_next,
        }
    }

    pub fn into_dto(self) -> GamedayDto {
        GamedayDto {
            id: self.id,
            name: self.name,
            game_number: self.game_number,
            season_id: self.season_id,
            scheduled_date: self.scheduled_date,
            finished: self.finished,
            is_previous: self.is_previous,
            is_current: self.is_current,
            is_next: self.is_next,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGamedayParam {
    pub name: String,
    pub season_id: i32,
    pub game_number: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    pub is_next: bool,
}

impl From<CreateGamedayDto> for CreateGamedayParam {
    /// A new gameday is `next` unless it is created as the current one or the caller
    /// says otherwise.
    fn from(dto: CreateGamedayDto) -> Self {
        let is_current = dto.is_current.unwrap_or(false);
        let is_next = dto.is_next.unwrap_or(!is_current);

        Self {
            name: dto.name.trim().to_string(),
            season_id: dto.season_id,
            game_number: dto.game_number,
            scheduled_date: dto.scheduled_date,
            is_current,
            is_next,
        }
    }
}

/// Which flag a gameday lookup within a season selects on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamedaySlot {
    Current,
    Next,
    Previous,
}

impl GamedaySlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl Validate for CreateGamedayDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        if self.game_number.is_some_and(|n| n <= 0) {
            errors.add("gameNumber", "gameNumber must be positive");
        }

        errors.into_result()
    }
}

impl Validate for UpdateGamedayDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());
        if self.game_number.is_some_and(|n| n <= 0) {
            errors.add("gameNumber", "gameNumber must be positive");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(is_current: Option<bool>, is_next: Option<bool>) -> CreateGamedayDto {
        CreateGamedayDto {
            name: "Matchday 1".to_string(),
            season_id: 1,
            game_number: Some(1),
            scheduled_date: None,
            is_current,
            is_next,
        }
    }

    #[test]
    fn defaults_to_next() {
        let param = CreateGamedayParam::from(dto(None, None));
        assert!(param.is_next);
        assert!(!param.is_current);
    }

    #[test]
    fn current_gameday_is_not_next_by_default() {
        let param = CreateGamedayParam::from(dto(Some(true), None));
        assert!(param.is_current);
        assert!(!param.is_next);
    }
}
