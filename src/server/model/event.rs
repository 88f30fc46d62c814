//! Domain model for events and the event status lifecycle.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        athlete::Gender,
        event::{CreateEventDto, EventDto, EventStatus, UpdateEventDto, UpdateEventStatusDto},
    },
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
        util::parse::parse_stored_enum,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub year: i32,
    pub season_id: i32,
    pub gameday_id: i32,
    pub venue_id: Option<i32>,
    pub gender: Option<Gender>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub status: EventStatus,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        let gender = match entity.gender.as_deref() {
            Some(gender) => Some(parse_stored_enum("Gender", gender)?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            status: parse_stored_enum("EventStatus", &entity.status)?,
            gender,
            name: entity.name,
            code: entity.code,
            sport_id: entity.sport_id,
            year: entity.year,
            season_id: entity.season_id,
            gameday_id: entity.gameday_id,
            venue_id: entity.venue_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            location: entity.location,
            description: entity.description,
            is_active: entity.is_active,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            code: self.code,
            sport_id: self.sport_id,
            year: self.year,
            season_id: self.season_id,
            gameday_id: self.gameday_id,
            venue_id: self.venue_id,
            gender: self.gender,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            description: self.description,
            is_active: self.is_active,
            status: self.status,
        }
    }
}

/// Whether an event may move from `from` to `to`.
///
/// Staying in the same status is always allowed and treated as a no-op by callers.
pub fn can_transition(from: EventStatus, to: EventStatus) -> bool {
    use EventStatus::*;

    if from == to {
        return true;
    }

    matches!(
        (from, to),
        (Scheduled, Live | Postponed | Canceled)
            | (Live, Finished | Postponed | Canceled)
            | (Finished, Live)
            | (Postponed, Scheduled | Live | Canceled)
            | (Canceled, Scheduled)
            | (Suspended, Scheduled)
    )
}

/// Whether performances may be recorded for an event in this status.
pub fn accepts_performances(status: EventStatus) -> bool {
    !matches!(status, EventStatus::Scheduled | EventStatus::Canceled)
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub year: i32,
    pub season_id: i32,
    pub gameday_id: i32,
    pub venue_id: Option<i32>,
    pub gender: Option<Gender>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: EventStatus,
}

fn check_dates(
    errors: &mut FieldErrors,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.add("endDate", "endDate must not be before startDate");
        }
    }
}

impl Validate for CreateEventDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        errors.require_text("code", &self.code);
        check_dates(&mut errors, Some(self.start_date), self.end_date);

        errors.into_result()
    }
}

// Statuses are an enumeration, so serde already rejects anything invalid.
impl Validate for UpdateEventStatusDto {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Validate for UpdateEventDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());
        check_dates(&mut errors, self.start_date, self.end_date);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EventStatus::*;

    #[test]
    fn allows_documented_transitions() {
        assert!(can_transition(Scheduled, Live));
        assert!(can_transition(Live, Finished));
        assert!(can_transition(Finished, Live));
        assert!(can_transition(Postponed, Scheduled));
        assert!(can_transition(Canceled, Scheduled));
        assert!(can_transition(Suspended, Scheduled));
    }

    #[test]
    fn rejects_undocumented_transitions() {
        assert!(!can_transition(Scheduled, Finished));
        assert!(!can_transition(Finished, Canceled));
        assert!(!can_transition(Canceled, Live));
        assert!(!can_transition(Suspended, Live));
        assert!(!can_transition(Live, Suspended));
    }

    #[test]
    fn same_status_is_allowed() {
        for status in EventStatus::ALL {
            assert!(can_transition(status, status));
        }
    }

    #[test]
    fn scheduled_and_canceled_events_reject_performances() {
        assert!(!accepts_performances(Scheduled));
        assert!(!accepts_performances(Canceled));
        assert!(accepts_performances(Live));
        assert!(accepts_performances(Finished));
    }
}
