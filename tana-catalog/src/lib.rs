pub mod availability;
pub mod jitter;
pub mod repository;
pub mod search;
pub mod seed;

pub use availability::{FixedAvailability, RandomAvailability};
pub use jitter::{NoJitter, UniformJitter};
pub use repository::{CatalogError, InMemoryTripRepository};
pub use search::{SearchError, SearchService};
