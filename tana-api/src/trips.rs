use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};
use tana_core::search::{self, ResultFilter, SortKey, TripQuery};
use tana_core::trip::TripView;

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    from: String,
    to: String,
    date: Option<NaiveDate>,
    flexible_date_range: Option<u32>,
    #[serde(default = "default_currency")]
    currency: String,
    // Post-search, caller-side knobs: filtering and ordering happen here in
    // the handler, over the converted prices the client will see.
    sort_by: Option<SortKey>,
    operator: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DetailParams {
    #[serde(default = "default_currency")]
    currency: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trips/search", get(search_trips))
        .route("/trips/{id}", get(trip_details))
}

async fn search_trips(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TripView>>, AppError> {
    let query = TripQuery {
        from: params.from,
        to: params.to,
        date: params.date,
        flexible_date_range: params.flexible_date_range,
    };

    let results = state
        .search
        .search(&query, &params.currency)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let filter = ResultFilter {
        operator: params.operator,
        min_price: params.min_price,
        max_price: params.max_price,
    };
    let mut results = search::apply_filter(results, &filter);
    if let Some(key) = params.sort_by {
        search::sort_trips(&mut results, key);
    }

    Ok(Json(results))
}

async fn trip_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DetailParams>,
) -> Result<Json<TripView>, AppError> {
    state
        .search
        .trip_details(id, &params.currency)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Trip {} not found", id)))
}
