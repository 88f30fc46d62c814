//! Athlete factory for creating test athlete entities.
//!
//! Athletes default to an unattached, active 20-year-old. Use `team()` and
//! `position()` for team-sport athletes, and the `athlete_discipline` factory to link
//! individual-sport athletes to disciplines.

use crate::factory::helpers::next_id;
use chrono::{Months, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test athletes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::athlete::AthleteFactory;
///
/// let athlete = AthleteFactory::new(&db)
///     .code("ATH001")
///     .team(Some(team.id))
///     .position(Some(position.id))
///     .build()
///     .await?;
/// ```
pub struct AthleteFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    first_name: String,
    last_name: String,
    team_id: Option<i32>,
    position_id: Option<i32>,
    date_of_birth: NaiveDate,
    nationality: String,
    gender: String,
    is_active: bool,
}

impl<'a> AthleteFactory<'a> {
    /// Creates a new AthleteFactory with default values.
    ///
    /// Defaults:
    /// - code: `"ATH{id}"`
    /// - first_name / last_name: `"First{id}"` / `"Last{id}"`
    /// - date_of_birth: 20 years before today
    /// - nationality: `"Nigerian"`
    /// - gender: `"MALE"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AthleteFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            code: format!("ATH{}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            team_id: None,
            position_id: None,
            date_of_birth: today.checked_sub_months(Months::new(240)).unwrap_or(today),
            nationality: "Nigerian".to_string(),
            gender: "MALE".to_string(),
            is_active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets first and last name.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn team(mut self, team_id: Option<i32>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn position(mut self, position_id: Option<i32>) -> Self {
        self.position_id = position_id;
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Sets the gender (`MALE`, `FEMALE` or `OTHER`).
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the athlete entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::athlete::Model)` - Created athlete entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::athlete::Model, DbErr> {
        let now = Utc::now();
        entity::athlete::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            team_id: ActiveValue::Set(self.team_id),
            position_id: ActiveValue::Set(self.position_id),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            nationality: ActiveValue::Set(self.nationality),
            gender: ActiveValue::Set(self.gender),
            height: ActiveValue::Set(180.0),
            weight: ActiveValue::Set(75.0),
            bio: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unattached athlete with default values.
///
/// Shorthand for `AthleteFactory::new(db).build().await`.
pub async fn create_athlete(db: &DatabaseConnection) -> Result<entity::athlete::Model, DbErr> {
    AthleteFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::{position::create_position, sport::create_team_sport, team::create_team};

    #[tokio::test]
    async fn creates_athlete_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_athlete_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let athlete = create_athlete(db).await?;

        assert!(athlete.code.starts_with("ATH"));
        assert!(athlete.is_active);
        assert!(athlete.team_id.is_none());
        assert!(athlete.position_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_team_athlete() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_athlete_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sport = create_team_sport(db).await?;
        let team = create_team(db, sport.id).await?;
        let position = create_position(db, sport.id).await?;
        let athlete = AthleteFactory::new(db)
            .code("BB01")
            .team(Some(team.id))
            .position(Some(position.id))
            .build()
            .await?;

        assert_eq!(athlete.code, "BB01");
        assert_eq!(athlete.team_id, Some(team.id));
        assert_eq!(athlete.position_id, Some(position.id));

        Ok(())
    }
}
