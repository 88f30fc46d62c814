//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and the
//! `helpers` module wires complete dependency chains together.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let sport = factory::sport::create_individual_sport(&db).await?;
//!     let discipline = factory::discipline::create_discipline(&db, sport.id).await?;
//!
//!     // Create with all dependencies
//!     let (sport, season, gameday, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let discipline = factory::discipline::DisciplineFactory::new(&db, sport.id)
//!     .code("100M")
//!     .unit(Some("seconds"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `sport` - Sport rows (team and individual)
//! - `position` - Positions for team sports
//! - `discipline` - Disciplines for individual sports
//! - `team` - Teams
//! - `athlete` - Athletes
//! - `athlete_discipline` - Athlete to discipline links
//! - `season` - Seasons
//! - `gameday` - Gamedays
//! - `venue` - Venues
//! - `event` - Events
//! - `performance` - Performance rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod athlete;
pub mod athlete_discipline;
pub mod discipline;
pub mod event;
pub mod gameday;
pub mod helpers;
pub mod performance;
pub mod position;
pub mod season;
pub mod sport;
pub mod team;
pub mod venue;

// Re-export commonly used factory functions for concise usage
pub use athlete::create_athlete;
pub use athlete_discipline::create_athlete_discipline;
pub use discipline::create_discipline;
pub use event::create_event;
pub use gameday::create_gameday;
pub use performance::create_performance;
pub use position::create_position;
pub use season::create_season;
pub use sport::{create_individual_sport, create_team_sport};
pub use team::create_team;
pub use venue::create_venue;
