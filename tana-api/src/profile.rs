use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::{error::AppError, middleware::auth::Claims, state::AppState};
use tana_store::{Profile, UserStoreError};

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Profile>, AppError> {
    state
        .users
        .profile(&claims.sub)
        .await
        .map(Json)
        .map_err(|e| match e {
            UserStoreError::NotFound => AppError::NotFoundError("User not found".to_string()),
            other => AppError::InternalServerError(other.to_string()),
        })
}
