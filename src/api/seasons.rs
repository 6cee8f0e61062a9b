//! Season table endpoints

use axum::{extract::Query, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::period::{season_containing, Season, SeasonWindow, SEASONS};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SeasonLookupQuery {
    /// Date to classify (YYYY-MM-DD)
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonLookupResponse {
    pub date: NaiveDate,
    /// Most specific season, null when the campground is closed
    pub season: Option<Season>,
}

/// List the yearly season windows (most specific first)
#[utoipa::path(
    get,
    path = "/seasons",
    tag = "seasons",
    responses(
        (status = 200, description = "Season table", body = Vec<SeasonWindow>)
    )
)]
pub async fn list_seasons() -> Json<Vec<SeasonWindow>> {
    Json(SEASONS.to_vec())
}

/// Season a date falls in
#[utoipa::path(
    get,
    path = "/seasons/lookup",
    tag = "seasons",
    params(SeasonLookupQuery),
    responses(
        (status = 200, description = "Season of the date", body = SeasonLookupResponse),
        (status = 400, description = "Invalid date")
    )
)]
pub async fn lookup_season(Query(query): Query<SeasonLookupQuery>) -> Json<SeasonLookupResponse> {
    Json(SeasonLookupResponse {
        date: query.date,
        season: season_containing(query.date),
    })
}
