//! Bookings repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Bookings pointing at a property, by arrival date
    pub async fn list_for_property(&self, property_id: i32) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE property_id = $1 ORDER BY arrival_date, id",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Create a booking for a property
    pub async fn create(&self, property_id: i32, data: &CreateBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                property_id, customer_id, arrival_date, departure_date,
                adult_count, child_count
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(data.customer_id)
        .bind(data.arrival_date)
        .bind(data.departure_date)
        .bind(data.adult_count)
        .bind(data.child_count)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Point a booking at a property
    pub async fn set_property(&self, booking_id: i32, property_id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET property_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(booking_id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))
    }

    /// Clear the back-reference, only if it still points at `property_id`.
    /// Returns false when the booking had already moved.
    pub async fn clear_property(&self, booking_id: i32, property_id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE bookings SET property_id = NULL WHERE id = $1 AND property_id = $2",
        )
        .bind(booking_id)
        .bind(property_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a booking
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }
}
