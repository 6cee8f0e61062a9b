//! Property types repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::property_type::{CreatePropertyType, PropertyType},
};

#[derive(Clone)]
pub struct PropertyTypesRepository {
    pool: Pool<Postgres>,
}

impl PropertyTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<PropertyType>> {
        let rows = sqlx::query_as::<_, PropertyType>("SELECT * FROM property_types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PropertyType> {
        sqlx::query_as::<_, PropertyType>("SELECT * FROM property_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property type {} not found", id)))
    }

    pub async fn create(&self, data: &CreatePropertyType) -> AppResult<PropertyType> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM property_types WHERE name = $1)")
                .bind(&data.name)
                .fetch_one(&self.pool)
                .await?;
        if exists {
            return Err(AppError::Conflict(format!(
                "Property type '{}' already exists",
                data.name
            )));
        }

        let row = sqlx::query_as::<_, PropertyType>(
            "INSERT INTO property_types (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a type; refused while properties still use it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let in_use: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE type_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Property type {} is used by {} properties",
                id, in_use
            )));
        }

        let result = sqlx::query("DELETE FROM property_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Property type {} not found", id)));
        }
        Ok(())
    }
}
