use async_trait::async_trait;

use crate::search::TripQuery;
use crate::trip::Trip;

/// Read-only access to the trip catalog.
///
/// The in-memory implementation answers immediately; the trait is async so
/// a real inventory backend can replace it without touching callers.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// All trips matching the route (exact, case-sensitive) and date
    /// criteria, in repository order. An empty result is not an error.
    async fn search(
        &self,
        query: &TripQuery,
    ) -> Result<Vec<Trip>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Trip>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Seat-availability source for trip detail views.
///
/// The shipped implementation is a randomized stand-in for a live inventory
/// query; keep callers against this trait so the simulation can be swapped
/// out wholesale.
pub trait AvailabilityProvider: Send + Sync {
    /// Seat labels to present as taken, drawn from the trip's seat set.
    fn taken_seats(&self, trip: &Trip) -> Vec<String>;
}

/// Dynamic-pricing source for search results. Same deal as
/// [`AvailabilityProvider`]: the uniform random jitter is a placeholder for
/// a real pricing service.
pub trait PriceJitterProvider: Send + Sync {
    /// Per-seat USD price after the dynamic-pricing adjustment.
    fn jittered_price(&self, base_usd: f64) -> f64;
}
