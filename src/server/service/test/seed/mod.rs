use crate::{
    model::sport::SportType,
    server::{
        data::{sport::SportRepository, team::TeamRepository},
        error::AppError,
        service::seed::{SeedReport, SeedService},
    },
};
use test_utils::builder::TestBuilder;

mod run;
