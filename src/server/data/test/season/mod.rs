use crate::server::{data::season::SeasonRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod clear_active;
mod stats;
