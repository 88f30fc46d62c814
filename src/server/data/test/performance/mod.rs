use crate::server::{
    data::performance::PerformanceRepository,
    error::AppError,
    model::performance::{BestScope, PerformanceFilter, PerformanceSortField, SortOrder},
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod clear_personal_best;
mod get_in_scope;
mod get_paginated;
