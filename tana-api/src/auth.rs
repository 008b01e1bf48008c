use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, middleware::auth::Claims, state::AppState};
use tana_store::UserStoreError;

#[derive(Debug, Deserialize)]
struct SignupRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    token: String,
    name: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    for (field, value) in [
        ("name", &req.name),
        ("email", &req.email),
        ("password", &req.password),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} must not be empty",
                field
            )));
        }
    }

    state
        .users
        .signup(&req.name, req.email.trim(), &req.password)
        .await
        .map_err(|e| match e {
            UserStoreError::AlreadyExists => {
                AppError::ValidationError("User already exists".to_string())
            }
            other => AppError::InternalServerError(other.to_string()),
        })?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .users
        .verify(req.email.trim(), &req.password)
        .await
        .map_err(|e| match e {
            UserStoreError::NotFound | UserStoreError::InvalidPassword => {
                AppError::AuthenticationError("Invalid email or password".to_string())
            }
            other => AppError::InternalServerError(other.to_string()),
        })?;

    let claims = Claims {
        sub: user.email.clone(),
        name: user.name.clone(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        name: user.name,
    }))
}
