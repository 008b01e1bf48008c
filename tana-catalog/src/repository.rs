use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use chrono::Duration;

use tana_core::repository::TripRepository;
use tana_core::search::TripQuery;
use tana_core::trip::{Trip, TripDataError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse trip data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read trip data: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] TripDataError),

    #[error("duplicate trip id {0}")]
    DuplicateId(i32),
}

/// The fixed trip collection backing search and detail lookups. Records are
/// validated up front; a malformed record fails the whole load.
pub struct InMemoryTripRepository {
    trips: Vec<Trip>,
}

impl InMemoryTripRepository {
    pub fn new(trips: Vec<Trip>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for trip in &trips {
            trip.validate()?;
            if !ids.insert(trip.id) {
                return Err(CatalogError::DuplicateId(trip.id));
            }
        }
        tracing::info!(count = trips.len(), "trip catalog loaded");
        Ok(Self { trips })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let trips: Vec<Trip> = serde_json::from_str(raw)?;
        Self::new(trips)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    fn matches_date(trip: &Trip, query: &TripQuery) -> bool {
        let Some(date) = query.date else {
            return true;
        };
        match query.flexible_date_range {
            Some(days) if days > 0 => {
                let window = Duration::days(days as i64);
                trip.date >= date - window && trip.date <= date + window
            }
            _ => trip.date == date,
        }
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn search(
        &self,
        query: &TripQuery,
    ) -> Result<Vec<Trip>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .trips
            .iter()
            .filter(|t| t.from == query.from && t.to == query.to)
            .filter(|t| Self::matches_date(t, query))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Trip>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.trips.iter().find(|t| t.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::NaiveDate;

    fn repo() -> InMemoryTripRepository {
        seed::seed_repository().unwrap()
    }

    fn query(from: &str, to: &str, date: Option<&str>, flex: Option<u32>) -> TripQuery {
        TripQuery {
            from: from.to_string(),
            to: to.to_string(),
            date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            flexible_date_range: flex,
        }
    }

    #[tokio::test]
    async fn finds_trips_by_exact_route_and_date() {
        let results = repo()
            .search(&query("Boston", "New York", Some("2025-11-10"), None))
            .await
            .unwrap();
        assert!(!results.is_empty());
        for trip in &results {
            assert_eq!(trip.from, "Boston");
            assert_eq!(trip.to, "New York");
            assert_eq!(trip.date, NaiveDate::from_ymd_opt(2025, 11, 10).unwrap());
        }
    }

    #[tokio::test]
    async fn route_match_is_case_sensitive() {
        let results = repo()
            .search(&query("boston", "new york", Some("2025-11-10"), None))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn flex_window_is_inclusive_at_both_edges() {
        // Seed has Boston -> New York trips on 11-10 and 11-12.
        let exact = repo()
            .search(&query("Boston", "New York", Some("2025-11-11"), None))
            .await
            .unwrap();
        assert!(exact.is_empty());

        let flex = repo()
            .search(&query("Boston", "New York", Some("2025-11-11"), Some(1)))
            .await
            .unwrap();
        let dates: Vec<_> = flex.iter().map(|t| t.date.to_string()).collect();
        assert!(dates.contains(&"2025-11-10".to_string()));
        assert!(dates.contains(&"2025-11-12".to_string()));
    }

    #[tokio::test]
    async fn no_match_returns_empty_not_error() {
        let results = repo()
            .search(&query("Atlantis", "El Dorado", None, None))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let repo = repo();
        let trip = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(trip.id, 1);
        assert!(repo.find_by_id(9999).await.unwrap().is_none());
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let raw = r#"[
            {"id": 1, "from": "A", "to": "B", "date": "2025-11-10",
             "departureTime": "08:00", "arrivalTime": "10:00", "duration": "2h",
             "busOperator": "Op", "price": 10.0, "seats": ["A1"]},
            {"id": 1, "from": "B", "to": "C", "date": "2025-11-10",
             "departureTime": "09:00", "arrivalTime": "11:00", "duration": "2h",
             "busOperator": "Op", "price": 10.0, "seats": ["A1"]}
        ]"#;
        assert!(matches!(
            InMemoryTripRepository::from_json(raw),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn malformed_record_fails_the_load() {
        let raw = r#"[
            {"id": 1, "from": "A", "to": "B", "date": "2025-11-10",
             "departureTime": "eight", "arrivalTime": "10:00", "duration": "2h",
             "busOperator": "Op", "price": 10.0, "seats": ["A1"]}
        ]"#;
        assert!(matches!(
            InMemoryTripRepository::from_json(raw),
            Err(CatalogError::Record(_))
        ));
    }

    #[test]
    fn missing_required_field_fails_the_parse() {
        // No "seats" key at all: rejected at deserialization, not first use.
        let raw = r#"[
            {"id": 1, "from": "A", "to": "B", "date": "2025-11-10",
             "departureTime": "08:00", "arrivalTime": "10:00", "duration": "2h",
             "busOperator": "Op", "price": 10.0}
        ]"#;
        assert!(matches!(
            InMemoryTripRepository::from_json(raw),
            Err(CatalogError::Parse(_))
        ));
    }
}
