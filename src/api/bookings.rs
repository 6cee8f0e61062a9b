//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking},
};

/// List bookings of a property
#[utoipa::path(
    get,
    path = "/properties/{id}/bookings",
    tag = "bookings",
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property bookings", body = Vec<Booking>),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_property_bookings(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list_for_property(property_id).await?;
    Ok(Json(bookings))
}

/// Create a booking on a property
#[utoipa::path(
    post,
    path = "/properties/{id}/bookings",
    tag = "bookings",
    params(("id" = i32, Path, description = "Property ID")),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 422, description = "Field violations", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(property_id, &data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Attach an existing booking to a property
#[utoipa::path(
    put,
    path = "/properties/{id}/bookings/{booking_id}",
    tag = "bookings",
    params(
        ("id" = i32, Path, description = "Property ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking attached", body = Booking),
        (status = 404, description = "Property or booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn attach_booking(
    State(state): State<crate::AppState>,
    Path((property_id, booking_id)): Path<(i32, i32)>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.attach(property_id, booking_id).await?;
    Ok(Json(booking))
}

/// Detach a booking from a property
#[utoipa::path(
    delete,
    path = "/properties/{id}/bookings/{booking_id}",
    tag = "bookings",
    params(
        ("id" = i32, Path, description = "Property ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking detached", body = Booking),
        (status = 404, description = "Booking not attached to this property", body = crate::error::ErrorResponse)
    )
)]
pub async fn detach_booking(
    State(state): State<crate::AppState>,
    Path((property_id, booking_id)): Path<(i32, i32)>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.detach(property_id, booking_id).await?;
    Ok(Json(booking))
}

/// Get a booking
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
