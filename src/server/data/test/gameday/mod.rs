use crate::server::{
    data::gameday::GamedayRepository,
    error::AppError,
    model::gameday::{CreateGamedayParam, GamedaySlot},
};
use test_utils::{builder::TestBuilder, factory};

mod find_slot;
