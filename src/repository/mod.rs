//! Repository layer for database operations

pub mod bookings;
pub mod properties;
pub mod property_types;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub properties: properties::PropertiesRepository,
    pub bookings: bookings::BookingsRepository,
    pub property_types: property_types::PropertyTypesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            properties: properties::PropertiesRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            property_types: property_types::PropertyTypesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Effective (page, per_page) after defaults and clamping
pub fn page_params(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    (page.unwrap_or(1).max(1), per_page.unwrap_or(20).clamp(1, 200))
}

/// Clamp pagination parameters, returning (limit, offset)
pub(crate) fn page_bounds(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let (page, per_page) = page_params(page, per_page);
    (per_page, (page - 1).saturating_mul(per_page))
}
