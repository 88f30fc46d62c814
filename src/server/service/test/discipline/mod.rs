use crate::server::{error::AppError, service::discipline::DisciplineService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
