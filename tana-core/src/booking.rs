use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::PriceQuote;
use crate::trip::TripView;

/// A confirmed booking. Created once at confirmation and never mutated;
/// the route/date/time fields are a snapshot of the trip view at booking
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub trip_id: i32,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub departure_time: String,
    /// Ordered selection; length equals `number_of_passengers`.
    pub selected_seats: Vec<String>,
    /// Final total in the booking currency.
    pub price: f64,
    /// Pre-discount total in USD.
    #[serde(rename = "basePriceUSD")]
    pub base_price_usd: f64,
    /// Discount in the booking currency.
    pub discount_applied: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code_used: Option<String>,
    pub passenger_name: String,
    pub passenger_email: String,
    pub number_of_passengers: u32,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PassengerDetails {
    pub name: String,
    pub email: String,
}

static LAST_BOOKING_ID: AtomicI64 = AtomicI64::new(0);

/// Timestamp-derived booking id, strictly increasing within the process so
/// bookings created in the same millisecond still get distinct ids.
pub fn next_booking_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_BOOKING_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_BOOKING_ID.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

/// Combine a trip view, the chosen seats, and a price quote into a booking
/// record.
///
/// The caller must already have checked `seats.len() == passenger count`;
/// the assembler trusts its inputs.
pub fn assemble(
    trip: &TripView,
    seats: Vec<String>,
    quote: &PriceQuote,
    passenger: PassengerDetails,
    currency: &str,
) -> Booking {
    Booking {
        id: next_booking_id(),
        trip_id: trip.id,
        from: trip.from.clone(),
        to: trip.to.clone(),
        date: trip.date,
        departure_time: trip.departure_time.clone(),
        number_of_passengers: seats.len() as u32,
        selected_seats: seats,
        price: quote.total,
        base_price_usd: quote.base_price_usd,
        discount_applied: quote.discount,
        promo_code_used: quote.promo_code.clone(),
        passenger_name: passenger.name,
        passenger_email: passenger.email,
        currency: currency.to_string(),
        created_at: Utc::now(),
    }
}
