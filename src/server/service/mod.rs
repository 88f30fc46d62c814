//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling complex multi-step operations

pub mod ai;
pub mod athlete;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod performance;
pub mod position;
pub mod season;
pub mod seed;
pub mod sport;
pub mod team;
pub mod venue;

#[cfg(test)]
mod test;
