//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, properties, property_types, seasons, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camping Rental API",
        version = "0.1.0",
        description = "Rental properties, availability windows, seasons and nightly rates",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Seasons
        seasons::list_seasons,
        seasons::lookup_season,
        // Properties
        properties::list_properties,
        properties::get_property,
        properties::create_property,
        properties::update_property,
        properties::delete_property,
        properties::register_image,
        properties::get_rate,
        // Bookings
        bookings::list_property_bookings,
        bookings::create_booking,
        bookings::attach_booking,
        bookings::detach_booking,
        bookings::get_booking,
        bookings::delete_booking,
        // Property types
        property_types::list_property_types,
        property_types::get_property_type,
        property_types::create_property_type,
        property_types::delete_property_type,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
    ),
    components(
        schemas(
            // Seasons
            crate::models::period::Season,
            crate::models::period::DayMonth,
            crate::models::period::SeasonWindow,
            seasons::SeasonLookupQuery,
            seasons::SeasonLookupResponse,
            // Properties
            crate::models::property::Property,
            crate::models::property::PropertyDraft,
            crate::models::property::UpdateProperty,
            crate::models::property::PropertyQuery,
            crate::models::property::RateQuery,
            crate::models::property::PropertyDetails,
            crate::models::rate::RateSchedule,
            crate::models::rate::RateQuote,
            crate::models::image::RegisterImage,
            crate::models::image::ImageUpload,
            crate::api::PaginatedProperties,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            // Property types
            crate::models::property_type::PropertyType,
            crate::models::property_type::CreatePropertyType,
            // Users
            crate::models::user::User,
            crate::models::user::UserQuery,
            crate::models::user::CreateUser,
            crate::api::PaginatedUsers,
            // Health
            health::HealthResponse,
            // Errors
            crate::models::availability::Violation,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "seasons", description = "Campground season table"),
        (name = "properties", description = "Rental properties, availability and rates"),
        (name = "bookings", description = "Bookings and their property association"),
        (name = "property_types", description = "Property classification"),
        (name = "users", description = "Owners and customers")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
