//! Properties repository

use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::property::{NewProperty, Property, PropertyQuery},
};

#[derive(Clone)]
pub struct PropertiesRepository {
    pool: Pool<Postgres>,
}

impl PropertiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List properties with optional filters and pagination
    pub async fn list(&self, query: &PropertyQuery) -> AppResult<(Vec<Property>, i64)> {
        let (limit, offset) = page_bounds(query.page, query.per_page);

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.type_id.is_some() {
            conditions.push(format!("type_id = ${}", idx));
            idx += 1;
        }
        if query.owner_id.is_some() {
            conditions.push(format!("owner_id = ${}", idx));
            idx += 1;
        }
        if query.available_on.is_some() {
            conditions.push(format!(
                "availability_start <= ${0} AND availability_end >= ${0}",
                idx
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_q = format!("SELECT COUNT(*) FROM properties {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(t) = query.type_id { count_builder = count_builder.bind(t); }
        if let Some(o) = query.owner_id { count_builder = count_builder.bind(o); }
        if let Some(d) = query.available_on { count_builder = count_builder.bind(d); }
        let total = count_builder.fetch_one(&self.pool).await?;

        let select_q = format!(
            "SELECT * FROM properties {} ORDER BY created_at DESC, id DESC LIMIT {} OFFSET {}",
            where_clause, limit, offset
        );
        let mut builder = sqlx::query_as::<_, Property>(&select_q);
        if let Some(t) = query.type_id { builder = builder.bind(t); }
        if let Some(o) = query.owner_id { builder = builder.bind(o); }
        if let Some(d) = query.available_on { builder = builder.bind(d); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok((rows, total))
    }

    /// Get property by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Property> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property {} not found", id)))
    }

    /// Insert a validated property; created_at is set by the database
    pub async fn create(&self, data: &NewProperty) -> AppResult<Property> {
        let row = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                availability_start, availability_end, type_id, owner_id,
                adult_rate, child_rate
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.availability.start)
        .bind(data.availability.end)
        .bind(data.type_id)
        .bind(data.owner_id)
        .bind(data.rates.adult_rate)
        .bind(data.rates.child_rate)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite the editable fields (last write wins)
    pub async fn update(&self, id: i32, data: &NewProperty) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties SET
                availability_start = $2, availability_end = $3,
                type_id = $4, owner_id = $5,
                adult_rate = $6, child_rate = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.availability.start)
        .bind(data.availability.end)
        .bind(data.type_id)
        .bind(data.owner_id)
        .bind(data.rates.adult_rate)
        .bind(data.rates.child_rate)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Property {} not found", id)))
    }

    /// Store the image file name and its change time
    pub async fn save_image(&self, property: &Property) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET image_name = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(property.id)
        .bind(&property.image_name)
        .bind(property.updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Property {} not found", property.id)))
    }

    /// Delete a property and its bookings, returning how many bookings went with it
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let bookings = sqlx::query("DELETE FROM bookings WHERE property_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound(format!("Property {} not found", id)));
        }

        tx.commit().await?;
        Ok(bookings)
    }
}
