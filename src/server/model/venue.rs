use crate::{
    model::venue::{CreateVenueDto, UpdateVenueDto, VenueDto},
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
    pub is_home: bool,
}

impl Venue {
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            capacity: entity.capacity,
            is_home: entity.is_home,
        }
    }

    pub fn into_dto(self) -> VenueDto {
        VenueDto {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            capacity: self.capacity,
            is_home: self.is_home,
        }
    }
}

fn check_capacity(errors: &mut FieldErrors, capacity: Option<i32>) {
    if capacity.is_some_and(|c| c <= 0) {
        errors.add("capacity", "capacity must be positive");
    }
}

impl Validate for CreateVenueDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        check_capacity(&mut errors, self.capacity);

        errors.into_result()
    }
}

impl Validate for UpdateVenueDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());
        check_capacity(&mut errors, self.capacity);

        errors.into_result()
    }
}
