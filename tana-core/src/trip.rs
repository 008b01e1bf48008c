use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A trip record that fails the load-time checks. Records are rejected when
/// loaded rather than blowing up at first field access.
#[derive(Debug, thiserror::Error)]
pub enum TripDataError {
    #[error("trip {0}: id must be positive")]
    InvalidId(i32),

    #[error("trip {id}: {field} must not be empty")]
    EmptyField { id: i32, field: &'static str },

    #[error("trip {id}: {field} {value:?} is not a valid HH:MM time")]
    BadTime {
        id: i32,
        field: &'static str,
        value: String,
    },

    #[error("trip {id}: price {price} is not a valid fare")]
    BadPrice { id: i32, price: f64 },

    #[error("trip {id}: duplicate seat label {seat:?}")]
    DuplicateSeat { id: i32, seat: String },

    #[error("trip {id}: review rating {rating} outside 1-5")]
    BadRating { id: i32, rating: u8 },
}

/// A rider review attached to a trip record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub rating: u8,
    pub comment: String,
    pub reviewer: String,
}

/// A scheduled bus departure. Immutable reference data: the catalog never
/// mutates a `Trip`, it only copies and annotates per query.
///
/// `price` is the base per-seat fare in USD; display prices are derived
/// per request (jitter + currency conversion).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i32,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub bus_operator: String,
    pub price: f64,
    pub seats: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub intermediate_stops: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Trip {
    /// Load-time sanity checks for a single record. Cross-record checks
    /// (duplicate ids) belong to the repository that owns the collection.
    pub fn validate(&self) -> Result<(), TripDataError> {
        if self.id < 1 {
            return Err(TripDataError::InvalidId(self.id));
        }
        for (field, value) in [
            ("from", &self.from),
            ("to", &self.to),
            ("busOperator", &self.bus_operator),
        ] {
            if value.trim().is_empty() {
                return Err(TripDataError::EmptyField { id: self.id, field });
            }
        }
        for (field, value) in [
            ("departureTime", &self.departure_time),
            ("arrivalTime", &self.arrival_time),
        ] {
            if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
                return Err(TripDataError::BadTime {
                    id: self.id,
                    field,
                    value: value.clone(),
                });
            }
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(TripDataError::BadPrice {
                id: self.id,
                price: self.price,
            });
        }
        if self.seats.is_empty() {
            return Err(TripDataError::EmptyField {
                id: self.id,
                field: "seats",
            });
        }
        let mut seen = HashSet::new();
        for seat in &self.seats {
            if !seen.insert(seat.as_str()) {
                return Err(TripDataError::DuplicateSeat {
                    id: self.id,
                    seat: seat.clone(),
                });
            }
        }
        for review in &self.reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(TripDataError::BadRating {
                    id: self.id,
                    rating: review.rating,
                });
            }
        }
        Ok(())
    }
}

/// A `Trip` annotated for a specific request: display price in the
/// requested currency plus the pre-conversion USD figure, and (for detail
/// views) the simulated seat availability.
///
/// Invariant when availability is attached: `taken_seats` is a subset of
/// `seats` and `seats_available = seats.len() - taken_seats.len()`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    pub id: i32,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub bus_operator: String,
    /// Display price in the requested currency, per seat.
    pub price: f64,
    /// Per-seat price in USD before currency conversion (post-jitter for
    /// search results, the base fare for detail views).
    #[serde(rename = "originalPriceUSD")]
    pub original_price_usd: f64,
    pub seats: Vec<String>,
    pub amenities: Vec<String>,
    pub intermediate_stops: Vec<String>,
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats_available: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_seats: Option<Vec<String>>,
}

impl TripView {
    /// Build a view from a trip and its resolved display price.
    pub fn priced(trip: Trip, price: f64, original_price_usd: f64) -> Self {
        Self {
            id: trip.id,
            from: trip.from,
            to: trip.to,
            date: trip.date,
            departure_time: trip.departure_time,
            arrival_time: trip.arrival_time,
            duration: trip.duration,
            bus_operator: trip.bus_operator,
            price,
            original_price_usd,
            seats: trip.seats,
            amenities: trip.amenities,
            intermediate_stops: trip.intermediate_stops,
            reviews: trip.reviews,
            seats_available: None,
            taken_seats: None,
        }
    }

    /// Attach simulated availability. Seats not present in the trip's seat
    /// list are ignored so the partition invariant holds.
    pub fn with_availability(mut self, taken: Vec<String>) -> Self {
        let taken: Vec<String> = taken
            .into_iter()
            .filter(|s| self.seats.contains(s))
            .collect();
        self.seats_available = Some(self.seats.len() - taken.len());
        self.taken_seats = Some(taken);
        self
    }
}
