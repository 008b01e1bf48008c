use rand::seq::SliceRandom;
use rand::Rng;

use tana_core::repository::AvailabilityProvider;
use tana_core::trip::Trip;

/// Randomized stand-in for a live seat-inventory query: marks up to
/// `max_taken` randomly chosen seats as taken. Re-invoked per detail
/// request, so results are intentionally not stable across calls.
pub struct RandomAvailability {
    max_taken: usize,
}

impl RandomAvailability {
    pub fn new(max_taken: usize) -> Self {
        Self { max_taken }
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self::new(4)
    }
}

impl AvailabilityProvider for RandomAvailability {
    fn taken_seats(&self, trip: &Trip) -> Vec<String> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(0..=self.max_taken);
        trip.seats
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

/// Deterministic availability for tests: always reports the configured
/// seats as taken.
pub struct FixedAvailability {
    taken: Vec<String>,
}

impl FixedAvailability {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
        }
    }
}

impl AvailabilityProvider for FixedAvailability {
    fn taken_seats(&self, _trip: &Trip) -> Vec<String> {
        self.taken.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(seat_count: usize) -> Trip {
        Trip {
            id: 1,
            from: "Boston".to_string(),
            to: "New York".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            departure_time: "08:00".to_string(),
            arrival_time: "12:30".to_string(),
            duration: "4h 30m".to_string(),
            bus_operator: "Greyhound".to_string(),
            price: 50.0,
            seats: (0..seat_count).map(|i| format!("S{i}")).collect(),
            amenities: vec![],
            intermediate_stops: vec![],
            reviews: vec![],
        }
    }

    #[test]
    fn takes_at_most_four_distinct_seats_from_the_trip() {
        let provider = RandomAvailability::default();
        let trip = trip(16);
        for _ in 0..200 {
            let taken = provider.taken_seats(&trip);
            assert!(taken.len() <= 4);
            let mut unique = taken.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), taken.len());
            for seat in &taken {
                assert!(trip.seats.contains(seat));
            }
        }
    }

    #[test]
    fn never_takes_more_seats_than_the_trip_has() {
        let provider = RandomAvailability::default();
        let trip = trip(2);
        for _ in 0..50 {
            assert!(provider.taken_seats(&trip).len() <= 2);
        }
    }
}
