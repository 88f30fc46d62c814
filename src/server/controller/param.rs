//! Query parameter types shared by the controllers.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        athlete::Gender,
        performance::Timeframe,
        sport::SportType,
    },
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
        model::{
            athlete::AthleteFilter,
            performance::{PerformanceFilter, PerformanceSortField, SortOrder},
        },
    },
};

const MAX_LIMIT: u64 = 100;

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

fn check_paging(errors: &mut FieldErrors, page: u64, limit: u64) {
    if page < 1 {
        errors.add("page", "page must be at least 1");
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        errors.add("limit", format!("limit must be between 1 and {}", MAX_LIMIT));
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AthleteListParam {
    /// 1-based
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Matches code, first name or last name
    pub search: Option<String>,
    pub position_code: Option<String>,
    pub team_code: Option<String>,
    pub sport_type: Option<SportType>,
    pub gender: Option<Gender>,
    pub is_active: Option<bool>,
    pub discipline_code: Option<String>,
}

impl Validate for AthleteListParam {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_paging(&mut errors, self.page, self.limit);
        errors.into_result()
    }
}

impl AthleteListParam {
    pub fn filter(&self) -> AthleteFilter {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        AthleteFilter {
            search: text(&self.search),
            position_code: text(&self.position_code),
            team_code: text(&self.team_code),
            sport_type: self.sport_type,
            gender: self.gender,
            is_active: self.is_active,
            discipline_code: text(&self.discipline_code),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PerformanceListParam {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub sort_by: PerformanceSortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub athlete_id: Option<i32>,
    pub event_id: Option<i32>,
    pub discipline_id: Option<i32>,
    pub season_id: Option<i32>,
}

impl Validate for PerformanceListParam {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_paging(&mut errors, self.page, self.limit);
        errors.into_result()
    }
}

impl PerformanceListParam {
    pub fn filter(&self) -> PerformanceFilter {
        PerformanceFilter {
            athlete_id: self.athlete_id,
            event_id: self.event_id,
            discipline_id: self.discipline_id,
            season_id: self.season_id,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

/// Optional season scope.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SeasonParam {
    pub season_id: Option<i32>,
}

/// Result count limit; each endpoint picks its own default.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParam {
    pub limit: Option<u64>,
}

impl LimitParam {
    /// Requested limit, or `default` when absent, capped at the listing maximum.
    pub fn limit_or(&self, default: u64) -> Result<u64, AppError> {
        match self.limit {
            None => Ok(default),
            Some(0) => Err(AppError::field("limit", "limit must be at least 1")),
            Some(limit) => Ok(limit.min(MAX_LIMIT)),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct DisciplineFilterParam {
    pub discipline_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeframeParam {
    #[serde(default)]
    pub timeframe: Timeframe,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athletes_page(page: u64, limit: u64) -> AthleteListParam {
        AthleteListParam {
            page,
            limit,
            search: None,
            position_code: None,
            team_code: None,
            sport_type: None,
            gender: None,
            is_active: None,
            discipline_code: None,
        }
    }

    #[test]
    fn paging_bounds() {
        assert!(athletes_page(1, 100).validate().is_ok());
        assert!(athletes_page(0, 10).validate().is_err());
        assert!(athletes_page(1, 101).validate().is_err());
        assert!(athletes_page(1, 0).validate().is_err());
    }

    #[test]
    fn limit_is_capped() {
        let param = LimitParam { limit: Some(500) };
        assert_eq!(param.limit_or(10).unwrap(), 100);

        let param = LimitParam { limit: None };
        assert_eq!(param.limit_or(20).unwrap(), 20);
    }

    #[test]
    fn blank_filters_are_dropped() {
        let param = AthleteListParam {
            page: 1,
            limit: 10,
            search: Some("  ".to_string()),
            position_code: None,
            team_code: Some(" BBT001 ".to_string()),
            sport_type: None,
            gender: None,
            is_active: None,
            discipline_code: None,
        };
        let filter = param.filter();

        assert_eq!(filter.search, None);
        assert_eq!(filter.team_code.as_deref(), Some("BBT001"));
    }
}
