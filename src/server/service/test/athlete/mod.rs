use crate::{
    model::{
        athlete::{CreateIndividualAthleteDto, CreateTeamAthleteDto, DisciplineEntryDto, Gender},
        sport::SportType,
    },
    server::{error::AppError, service::athlete::AthleteService},
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create_individual_athlete;
mod create_team_athlete;
mod delete;

fn birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 5, 17).unwrap()
}
