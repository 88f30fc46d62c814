use crate::{
    model::season::{CreateSeasonDto, SeasonType},
    server::{error::AppError, service::season::SeasonService},
};
use test_utils::{builder::TestBuilder, factory};

mod activate;
mod create;
mod delete;
