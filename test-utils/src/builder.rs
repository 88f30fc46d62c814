use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Sport, Team};
///
/// let test = TestBuilder::new()
///     .with_table(Sport)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the sport reference tables.
    ///
    /// Adds, in dependency order:
    /// - Sport
    /// - Position
    /// - Discipline
    /// - Team
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_sport_tables(self) -> Self {
        self.with_table(Sport)
            .with_table(Position)
            .with_table(Discipline)
            .with_table(Team)
    }

    /// Adds all tables required for athlete operations.
    ///
    /// Equivalent to `with_sport_tables()` followed by Athlete and AthleteDiscipline.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_athlete_tables(self) -> Self {
        self.with_sport_tables()
            .with_table(Athlete)
            .with_table(AthleteDiscipline)
    }

    /// Adds the scheduling tables without any sport data.
    ///
    /// Adds Season, Gameday and Venue.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_season_tables(self) -> Self {
        self.with_table(Season)
            .with_table(Gameday)
            .with_table(Venue)
    }

    /// Adds all tables required for event operations.
    ///
    /// Adds Sport, Season, Gameday, Venue and Event.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_event_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_event_tables(self) -> Self {
        self.with_table(Sport).with_season_tables().with_table(Event)
    }

    /// Adds every table of the schema, which performance operations touch.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_performance_tables(self) -> Self {
        self.with_athlete_tables()
            .with_season_tables()
            .with_table(Event)
            .with_table(Performance)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with an in-memory database and tables created
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
