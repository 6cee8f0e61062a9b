//! API handlers for the camping rental REST endpoints

pub mod bookings;
pub mod health;
pub mod openapi;
pub mod properties;
pub mod property_types;
pub mod seasons;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{property::Property, user::User};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
#[aliases(PaginatedProperties = PaginatedResponse<Property>, PaginatedUsers = PaginatedResponse<User>)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}
