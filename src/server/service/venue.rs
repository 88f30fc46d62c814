use sea_orm::DatabaseConnection;

use crate::{
    model::venue::{CreateVenueDto, UpdateVenueDto},
    server::{data::venue::VenueRepository, error::AppError, model::venue::Venue},
};

pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateVenueDto) -> Result<Venue, AppError> {
        VenueRepository::new(self.db).create(dto).await
    }

    pub async fn get_all(&self) -> Result<Vec<Venue>, AppError> {
        VenueRepository::new(self.db).get_all().await
    }

    pub async fn get_home(&self) -> Result<Vec<Venue>, AppError> {
        VenueRepository::new(self.db).get_home().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Venue, AppError> {
        VenueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))
    }

    pub async fn update(&self, id: i32, dto: UpdateVenueDto) -> Result<Venue, AppError> {
        VenueRepository::new(self.db)
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))
    }

    /// Deletes a venue no event takes place at
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VenueRepository::new(self.db);
        self.get_by_id(id).await?;

        let events = repo.count_events(id).await?;
        if events > 0 {
            return Err(AppError::Conflict(format!(
                "Venue still hosts {} events",
                events
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
