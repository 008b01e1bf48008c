use std::sync::Arc;

use tana_core::currency;
use tana_core::repository::{AvailabilityProvider, PriceJitterProvider, TripRepository};
use tana_core::search::TripQuery;
use tana_core::trip::TripView;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("trip catalog unavailable: {0}")]
    Repository(Box<dyn std::error::Error + Send + Sync>),
}

/// Composes the trip repository with the pricing and availability providers
/// to produce request-scoped trip views.
pub struct SearchService {
    repo: Arc<dyn TripRepository>,
    jitter: Arc<dyn PriceJitterProvider>,
    availability: Arc<dyn AvailabilityProvider>,
}

impl SearchService {
    pub fn new(
        repo: Arc<dyn TripRepository>,
        jitter: Arc<dyn PriceJitterProvider>,
        availability: Arc<dyn AvailabilityProvider>,
    ) -> Self {
        Self {
            repo,
            jitter,
            availability,
        }
    }

    /// Route/date search. Each match gets a jittered USD price and a
    /// converted display price; ordering is repository order, sorting is
    /// the caller's call.
    pub async fn search(
        &self,
        query: &TripQuery,
        currency_code: &str,
    ) -> Result<Vec<TripView>, SearchError> {
        let trips = self
            .repo
            .search(query)
            .await
            .map_err(SearchError::Repository)?;

        tracing::debug!(
            from = %query.from,
            to = %query.to,
            matches = trips.len(),
            "trip search"
        );

        Ok(trips
            .into_iter()
            .map(|trip| {
                let price_usd = self.jitter.jittered_price(trip.price);
                let price = currency::convert(price_usd, currency_code);
                TripView::priced(trip, price, price_usd)
            })
            .collect())
    }

    /// Detail view for one trip: base fare (no jitter), converted price,
    /// and simulated seat availability.
    pub async fn trip_details(
        &self,
        id: i32,
        currency_code: &str,
    ) -> Result<Option<TripView>, SearchError> {
        let Some(trip) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(SearchError::Repository)?
        else {
            return Ok(None);
        };

        let taken = self.availability.taken_seats(&trip);
        let base_usd = trip.price;
        let price = currency::convert(base_usd, currency_code);
        Ok(Some(
            TripView::priced(trip, price, base_usd).with_availability(taken),
        ))
    }
}
