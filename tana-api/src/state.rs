use std::sync::Arc;

use tana_catalog::SearchService;
use tana_core::repository::TripRepository;
use tana_store::UserStore;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub trips: Arc<dyn TripRepository>,
    pub users: Arc<UserStore>,
    pub auth: AuthConfig,
}
