use crate::{
    model::{
        event::EventStatus,
        performance::{CreatePerformanceDto, PerformanceMetricsDto},
    },
    server::{
        error::AppError,
        service::{event::EventService, performance::PerformanceService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update_status;
