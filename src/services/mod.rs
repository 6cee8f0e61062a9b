//! Business logic services

pub mod bookings;
pub mod properties;
pub mod property_types;
pub mod users;

use crate::{config::UploadsConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub properties: properties::PropertiesService,
    pub bookings: bookings::BookingsService,
    pub property_types: property_types::PropertyTypesService,
    pub users: users::UsersService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, uploads_config: UploadsConfig) -> Self {
        Self {
            properties: properties::PropertiesService::new(repository.clone(), uploads_config),
            bookings: bookings::BookingsService::new(repository.clone()),
            property_types: property_types::PropertyTypesService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            repository,
        }
    }

    /// Whether the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
