use std::collections::HashSet;

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::AppError, middleware::auth::Claims, state::AppState};
use tana_core::booking::{self, Booking, PassengerDetails};
use tana_core::trip::TripView;
use tana_core::{currency, pricing};
use tana_store::UserStoreError;

fn default_currency() -> String {
    "USD".to_string()
}

fn default_passengers() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingRequest {
    trip_id: i32,
    seats: Vec<String>,
    #[serde(default = "default_passengers")]
    number_of_passengers: u32,
    promo_code: Option<String>,
    #[serde(default = "default_currency")]
    currency: String,
    /// Defaults to the logged-in user's details when omitted.
    passenger_name: Option<String>,
    passenger_email: Option<String>,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    message: String,
    booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // 1. Seat count must match the passenger count exactly
    if req.number_of_passengers == 0 {
        return Err(AppError::ValidationError(
            "At least one passenger is required".to_string(),
        ));
    }
    if req.seats.len() != req.number_of_passengers as usize {
        return Err(AppError::ValidationError(format!(
            "Select exactly {} seat(s)",
            req.number_of_passengers
        )));
    }
    let mut seen = HashSet::new();
    for seat in &req.seats {
        if !seen.insert(seat.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Seat {} selected twice",
                seat
            )));
        }
    }

    // 2. Look up the trip and check the seats belong to it
    let trip = state
        .trips
        .find_by_id(req.trip_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Trip {} not found", req.trip_id)))?;

    for seat in &req.seats {
        if !trip.seats.contains(seat) {
            return Err(AppError::ValidationError(format!(
                "Seat {} does not exist on this trip",
                seat
            )));
        }
    }

    // 3. Price the booking from the base USD fare; an unknown promo code
    //    just means no discount, it does not block the booking
    let quote = pricing::quote(
        trip.price,
        req.number_of_passengers,
        req.promo_code.as_deref(),
        &req.currency,
    );

    let passenger = PassengerDetails {
        name: req.passenger_name.unwrap_or_else(|| claims.name.clone()),
        email: req.passenger_email.unwrap_or_else(|| claims.sub.clone()),
    };

    // 4. Assemble the immutable booking record and hand it to the store
    let display_price = currency::convert(trip.price, &req.currency);
    let base_usd = trip.price;
    let view = TripView::priced(trip, display_price, base_usd);
    let booking = booking::assemble(&view, req.seats, &quote, passenger, &req.currency);

    state
        .users
        .add_booking(&claims.sub, booking.clone())
        .await
        .map_err(|e| match e {
            UserStoreError::NotFound => AppError::NotFoundError("User not found".to_string()),
            other => AppError::InternalServerError(other.to_string()),
        })?;

    info!(
        booking_id = booking.id,
        trip_id = booking.trip_id,
        passengers = booking.number_of_passengers,
        "booking created"
    );

    Ok(Json(BookingResponse {
        message: "Booking created successfully".to_string(),
        booking,
    }))
}
