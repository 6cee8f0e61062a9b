//! Property types service

use crate::{
    error::AppResult,
    models::property_type::{CreatePropertyType, PropertyType},
    repository::Repository,
};

#[derive(Clone)]
pub struct PropertyTypesService {
    repository: Repository,
}

impl PropertyTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PropertyType>> {
        self.repository.property_types.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PropertyType> {
        self.repository.property_types.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreatePropertyType) -> AppResult<PropertyType> {
        let created = self.repository.property_types.create(data).await?;
        tracing::info!("Property type '{}' created", created.name);
        Ok(created)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.property_types.delete(id).await
    }
}
