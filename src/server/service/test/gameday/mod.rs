use crate::server::{
    error::AppError, model::gameday::GamedaySlot, service::gameday::GamedayService,
};
use test_utils::{builder::TestBuilder, factory};

mod finish;
mod set_current;
