//! Factory for athlete to discipline links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links an athlete to a discipline with an optional current rank.
///
/// # Arguments
/// - `db` - Database connection
/// - `athlete_id` - Athlete to link
/// - `discipline_id` - Discipline to link
/// - `current_rank` - Optional ranking within the discipline
///
/// # Returns
/// - `Ok(entity::athlete_discipline::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert
pub async fn create_athlete_discipline(
    db: &DatabaseConnection,
    athlete_id: i32,
    discipline_id: i32,
    current_rank: Option<i32>,
) -> Result<entity::athlete_discipline::Model, DbErr> {
    entity::athlete_discipline::ActiveModel {
        id: ActiveValue::NotSet,
        athlete_id: ActiveValue::Set(athlete_id),
        discipline_id: ActiveValue::Set(discipline_id),
        current_rank: ActiveValue::Set(current_rank),
    }
    .insert(db)
    .await
}
