//! HTTP request handlers.
//!
//! Each module groups the endpoints of one resource. Handlers extract and validate the
//! request, call the matching service and wrap the result in the `ApiResponse` envelope.
//! Every handler carries a `utoipa::path` annotation so the router can assemble the
//! OpenAPI document from the same functions it mounts.

pub mod ai;
pub mod athlete;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod health;
pub mod param;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod venue;
