//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All database
//! queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Every repository is generic over `ConnectionTrait` so the same methods run against the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes
//! to commit atomically.

pub mod athlete;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod venue;

#[cfg(test)]
mod test;
