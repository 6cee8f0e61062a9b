//! Property type (mobile home, caravan, pitch...)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PropertyType {
    pub id: i32,
    pub name: String,
}

/// Create property type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePropertyType {
    #[validate(length(min = 1, max = 255, message = "Le nom doit contenir entre 1 et 255 caractères."))]
    pub name: String,
}
