//! Discipline factory for individual-sport disciplines.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test disciplines with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let sprint = DisciplineFactory::new(&db, sport.id)
///     .code("100M")
///     .unit(Some("seconds"))
///     .build()
///     .await?;
/// ```
pub struct DisciplineFactory<'a> {
    db: &'a DatabaseConnection,
    sport_id: i32,
    name: String,
    code: String,
    description: Option<String>,
    unit: Option<String>,
}

impl<'a> DisciplineFactory<'a> {
    /// Creates a new DisciplineFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Discipline {id}"`
    /// - code: `"DSC{id}"`
    /// - unit: `Some("seconds")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sport_id` - Sport the discipline belongs to
    pub fn new(db: &'a DatabaseConnection, sport_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            sport_id,
            name: format!("Discipline {}", id),
            code: format!("DSC{}", id),
            description: None,
            unit: Some("seconds".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the measurement unit, `None` for unitless disciplines.
    pub fn unit(mut self, unit: Option<&str>) -> Self {
        self.unit = unit.map(str::to_string);
        self
    }

    /// Builds and inserts the discipline entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discipline::Model)` - Created discipline entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discipline::Model, DbErr> {
        entity::discipline::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            sport_id: ActiveValue::Set(self.sport_id),
            description: ActiveValue::Set(self.description),
            unit: ActiveValue::Set(self.unit),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `seconds` discipline with default values for the given sport.
pub async fn create_discipline(
    db: &DatabaseConnection,
    sport_id: i32,
) -> Result<entity::discipline::Model, DbErr> {
    DisciplineFactory::new(db, sport_id).build().await
}
