use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::trip::TripView;

/// A route/date search against the trip catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripQuery {
    pub from: String,
    pub to: String,
    pub date: Option<NaiveDate>,
    /// Symmetric day window around `date`; trips within
    /// `[date - n, date + n]` inclusive also match.
    pub flexible_date_range: Option<u32>,
}

/// Sort orders a caller can apply over search results. Wire values match
/// the query parameter the UI sends ("priceAsc", "departureDesc", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    DepartureAsc,
    DepartureDesc,
}

/// Caller-applied, post-search result filters. Price bounds are inclusive
/// and apply to the converted display price.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    pub operator: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

pub fn apply_filter(trips: Vec<TripView>, filter: &ResultFilter) -> Vec<TripView> {
    trips
        .into_iter()
        .filter(|t| match &filter.operator {
            Some(op) => t.bus_operator == *op,
            None => true,
        })
        .filter(|t| filter.min_price.map_or(true, |min| t.price >= min))
        .filter(|t| filter.max_price.map_or(true, |max| t.price <= max))
        .collect()
}

/// Stable sort of search results. Departure times are "HH:MM" strings
/// compared as same-day wall-clock times.
pub fn sort_trips(trips: &mut [TripView], key: SortKey) {
    match key {
        SortKey::PriceAsc => trips.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => trips.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::DepartureAsc => {
            trips.sort_by_key(|t| wall_clock(&t.departure_time));
        }
        SortKey::DepartureDesc => {
            trips.sort_by_key(|t| std::cmp::Reverse(wall_clock(&t.departure_time)));
        }
    }
}

// Catalog records are validated at load time, so a parse failure here can
// only come from a hand-built view; sort it first rather than panicking.
fn wall_clock(hhmm: &str) -> NaiveTime {
    NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap_or(NaiveTime::MIN)
}
