//! Property endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        image::{ImageUpload, RegisterImage},
        property::{Property, PropertyDetails, PropertyDraft, PropertyQuery, RateQuery, UpdateProperty},
        rate::RateQuote,
    },
    repository::page_params,
};

use super::{PaginatedProperties, PaginatedResponse};

/// List properties with filters and pagination
#[utoipa::path(
    get,
    path = "/properties",
    tag = "properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "List of properties", body = PaginatedProperties)
    )
)]
pub async fn list_properties(
    State(state): State<crate::AppState>,
    Query(query): Query<PropertyQuery>,
) -> AppResult<Json<PaginatedResponse<Property>>> {
    let (properties, total) = state.services.properties.list(&query).await?;
    let (page, per_page) = page_params(query.page, query.per_page);

    Ok(Json(PaginatedResponse {
        items: properties,
        total,
        page,
        per_page,
    }))
}

/// Get property details
#[utoipa::path(
    get,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property details", body = PropertyDetails),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PropertyDetails>> {
    let details = state.services.properties.get_details(id).await?;
    Ok(Json(details))
}

/// Create a property
#[utoipa::path(
    post,
    path = "/properties",
    tag = "properties",
    request_body = PropertyDraft,
    responses(
        (status = 201, description = "Property created", body = Property),
        (status = 422, description = "Field violations", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_property(
    State(state): State<crate::AppState>,
    Json(draft): Json<PropertyDraft>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = state.services.properties.create(draft).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Update a property
#[utoipa::path(
    put,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Field violations", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.update(id, &data).await?;
    Ok(Json(property))
}

/// Delete a property and its bookings
#[utoipa::path(
    delete,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.properties.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register a new image for a property
///
/// Returns the file name the storage service must save the upload under.
#[utoipa::path(
    put,
    path = "/properties/{id}/image",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    request_body = RegisterImage,
    responses(
        (status = 200, description = "Image registered", body = ImageUpload),
        (status = 422, description = "Not an image file", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_image(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<RegisterImage>,
) -> AppResult<Json<ImageUpload>> {
    data.validate()?;
    let upload = state.services.properties.register_image(id, &data).await?;
    Ok(Json(upload))
}

/// Nightly rate quote for a guest composition
#[utoipa::path(
    get,
    path = "/properties/{id}/rate",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID"), RateQuery),
    responses(
        (status = 200, description = "Rate quote", body = RateQuote),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_rate(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(query): Query<RateQuery>,
) -> AppResult<Json<RateQuote>> {
    let adults = query.adults.unwrap_or(1);
    let children = query.children.unwrap_or(0);
    if adults == 0 && children == 0 {
        return Err(AppError::BadRequest("At least one guest is required".to_string()));
    }
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let quote = state.services.properties.quote(id, adults, children, date).await?;
    Ok(Json(quote))
}
