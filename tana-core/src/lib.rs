pub mod booking;
pub mod currency;
pub mod pricing;
pub mod repository;
pub mod search;
pub mod seats;
pub mod trip;

pub use booking::{Booking, PassengerDetails};
pub use pricing::{PriceQuote, PromoStatus};
pub use repository::{AvailabilityProvider, PriceJitterProvider, TripRepository};
pub use search::{ResultFilter, SortKey, TripQuery};
pub use seats::SeatSelection;
pub use trip::{Review, Trip, TripDataError, TripView};
