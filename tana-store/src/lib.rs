pub mod app_config;
pub mod users;

pub use app_config::Config;
pub use users::{AuthenticatedUser, Profile, UserStore, UserStoreError};
