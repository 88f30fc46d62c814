//! Sport factory for creating test sport entities.
//!
//! Sport names are unique, so tests that need several sports must pick distinct
//! names through the builder.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::sport::SportFactory;
///
/// let boxing = SportFactory::new(&db)
///     .name("BOXING")
///     .team_sport(false)
///     .build()
///     .await?;
/// ```
pub struct SportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_team_sport: bool,
}

impl<'a> SportFactory<'a> {
    /// Creates a new SportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"ATHLETICS"`
    /// - is_team_sport: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SportFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: "ATHLETICS".to_string(),
            is_team_sport: false,
        }
    }

    /// Sets the sport name (a `SportType` name such as `BASKETBALL`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the sport is played by teams.
    pub fn team_sport(mut self, is_team_sport: bool) -> Self {
        self.is_team_sport = is_team_sport;
        self
    }

    /// Builds and inserts the sport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::sport::Model)` - Created sport entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn build(self) -> Result<entity::sport::Model, DbErr> {
        entity::sport::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            is_team_sport: ActiveValue::Set(self.is_team_sport),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the `ATHLETICS` individual sport.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::sport::Model)` - Created sport entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_individual_sport(
    db: &DatabaseConnection,
) -> Result<entity::sport::Model, DbErr> {
    SportFactory::new(db).build().await
}

/// Creates the `BASKETBALL` team sport.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::sport::Model)` - Created sport entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_team_sport(db: &DatabaseConnection) -> Result<entity::sport::Model, DbErr> {
    SportFactory::new(db)
        .name("BASKETBALL")
        .team_sport(true)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_individual_and_team_sport() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Sport).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let athletics = create_individual_sport(db).await?;
        let basketball = create_team_sport(db).await?;

        assert_eq!(athletics.name, "ATHLETICS");
        assert!(!athletics.is_team_sport);
        assert_eq!(basketball.name, "BASKETBALL");
        assert!(basketball.is_team_sport);
        assert_ne!(athletics.id, basketball.id);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_sport_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Sport).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_individual_sport(db).await?;
        let result = create_individual_sport(db).await;

        assert!(result.is_err());

        Ok(())
    }
}
