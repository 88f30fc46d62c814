use crate::server::{
    data::athlete::AthleteRepository, error::AppError, model::athlete::AthleteFilter,
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_sport;
mod get_paginated;
