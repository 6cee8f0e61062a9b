//! Property type endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::property_type::{CreatePropertyType, PropertyType},
};

/// List property types
#[utoipa::path(
    get,
    path = "/property-types",
    tag = "property_types",
    responses(
        (status = 200, description = "Property types", body = Vec<PropertyType>)
    )
)]
pub async fn list_property_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PropertyType>>> {
    let types = state.services.property_types.list().await?;
    Ok(Json(types))
}

/// Get a property type
#[utoipa::path(
    get,
    path = "/property-types/{id}",
    tag = "property_types",
    params(("id" = i32, Path, description = "Property type ID")),
    responses(
        (status = 200, description = "Property type", body = PropertyType),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_property_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PropertyType>> {
    let property_type = state.services.property_types.get_by_id(id).await?;
    Ok(Json(property_type))
}

/// Create a property type
#[utoipa::path(
    post,
    path = "/property-types",
    tag = "property_types",
    request_body = CreatePropertyType,
    responses(
        (status = 201, description = "Property type created", body = PropertyType),
        (status = 409, description = "Name already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_property_type(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePropertyType>,
) -> AppResult<(StatusCode, Json<PropertyType>)> {
    data.validate()?;
    let created = state.services.property_types.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a property type not used by any property
#[utoipa::path(
    delete,
    path = "/property-types/{id}",
    tag = "property_types",
    params(("id" = i32, Path, description = "Property type ID")),
    responses(
        (status = 204, description = "Property type deleted"),
        (status = 409, description = "Type still in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_property_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.property_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
