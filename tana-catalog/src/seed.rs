use crate::repository::{CatalogError, InMemoryTripRepository};

/// Built-in trip records, used when no catalog file is configured.
const SEED_TRIPS: &str = include_str!("../data/trips.json");

pub fn seed_repository() -> Result<InMemoryTripRepository, CatalogError> {
    InMemoryTripRepository::from_json(SEED_TRIPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_loads_cleanly() {
        let repo = seed_repository().unwrap();
        assert!(!repo.is_empty());
    }
}
