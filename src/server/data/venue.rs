use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::venue::{CreateVenueDto, UpdateVenueDto},
    server::{error::AppError, model::venue::Venue},
};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateVenueDto) -> Result<Venue, AppError> {
        let entity = entity::venue::ActiveModel {
            name: ActiveValue::Set(dto.name.trim().to_string()),
            address: ActiveValue::Set(dto.address),
            city: ActiveValue::Set(dto.city),
            capacity: ActiveValue::Set(dto.capacity),
            is_home: ActiveValue::Set(dto.is_home),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Venue::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, AppError> {
        let entity = entity::prelude::Venue::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Venue::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Venue>, AppError> {
        let entities = entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    pub async fn get_home(&self) -> Result<Vec<Venue>, AppError> {
        let entities = entity::prelude::Venue::find()
            .filter(entity::venue::Column::IsHome.eq(true))
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    pub async fn update(&self, id: i32, dto: UpdateVenueDto) -> Result<Option<Venue>, AppError> {
        let Some(existing) = entity::prelude::Venue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::venue::ActiveModel = existing.into();
        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(address) = dto.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(city) = dto.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(capacity) = dto.capacity {
            active.capacity = ActiveValue::Set(Some(capacity));
        }
        if let Some(is_home) = dto.is_home {
            active.is_home = ActiveValue::Set(is_home);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Venue::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Venue::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_events(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::VenueId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
