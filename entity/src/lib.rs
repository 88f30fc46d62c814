//! Database entities for the varsity schema.
//!
//! One module per table. Relations are declared on both sides so that
//! `find_also_related` and `find_with_related` work in either direction.

pub mod prelude;

pub mod athlete;
pub mod athlete_discipline;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod university;
pub mod venue;
