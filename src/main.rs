//! Camping Rental Server
//!
//! REST API server for campground property rentals.

use axum::{
    routing::{get, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

use camping_rental::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Camping Rental Server v{}", env!("CARGO_PKG_VERSION"));

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database migrations completed");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let repository = Repository::new(pool);
    let services = Services::new(repository, config.uploads);

    let state = AppState {
        services: Arc::new(services),
    };

    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Console logging (pretty or json), plus daily files when a directory is configured
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("camping_rental={},tower_http=debug", logging.level).into());

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if logging.format == "json" {
        layers.push(tracing_subscriber::fmt::layer().json().boxed());
    } else {
        layers.push(tracing_subscriber::fmt::layer().boxed());
    }

    let guard = logging.directory.as_ref().map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, "camping-rental.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        );
        guard
    });

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .init();

    guard
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Seasons
        .route("/seasons", get(api::seasons::list_seasons))
        .route("/seasons/lookup", get(api::seasons::lookup_season))
        // Properties
        .route(
            "/properties",
            get(api::properties::list_properties).post(api::properties::create_property),
        )
        .route(
            "/properties/:id",
            get(api::properties::get_property)
                .put(api::properties::update_property)
                .delete(api::properties::delete_property),
        )
        .route("/properties/:id/image", put(api::properties::register_image))
        .route("/properties/:id/rate", get(api::properties::get_rate))
        // Bookings
        .route(
            "/properties/:id/bookings",
            get(api::bookings::list_property_bookings).post(api::bookings::create_booking),
        )
        .route(
            "/properties/:id/bookings/:booking_id",
            put(api::bookings::attach_booking).delete(api::bookings::detach_booking),
        )
        .route(
            "/bookings/:id",
            get(api::bookings::get_booking).delete(api::bookings::delete_booking),
        )
        // Property types
        .route(
            "/property-types",
            get(api::property_types::list_property_types)
                .post(api::property_types::create_property_type),
        )
        .route(
            "/property-types/:id",
            get(api::property_types::get_property_type)
                .delete(api::property_types::delete_property_type),
        )
        // Users
        .route("/users", get(api::users::list_users).post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .with_state(state);

    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
