//! Venue factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a venue named `"Venue {id}"` with the given home flag.
///
/// # Arguments
/// - `db` - Database connection
/// - `is_home` - Whether the venue is a home venue
///
/// # Returns
/// - `Ok(entity::venue::Model)` - Created venue
/// - `Err(DbErr)` - Database error during insert
pub async fn create_venue_with_home(
    db: &DatabaseConnection,
    is_home: bool,
) -> Result<entity::venue::Model, DbErr> {
    let id = next_id();
    entity::venue::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Venue {}", id)),
        address: ActiveValue::Set(None),
        city: ActiveValue::Set(Some("Lagos".to_string())),
        capacity: ActiveValue::Set(Some(5000)),
        is_home: ActiveValue::Set(is_home),
    }
    .insert(db)
    .await
}

/// Creates an away venue.
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    create_venue_with_home(db, false).await
}
