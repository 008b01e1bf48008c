use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;

use tana_core::booking::Booking;

#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

#[derive(Debug, Clone)]
struct UserRecord {
    name: String,
    email: String,
    password_hash: String,
    bookings: Vec<Booking>,
}

/// An authenticated identity, handed back on successful login. The password
/// hash never leaves the store.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
}

/// Profile view: the user plus their booking history and the locations they
/// travel from, derived from that history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bookings: Vec<Booking>,
    pub preferred_locations: Vec<String>,
}

/// Session-scoped user state, owned by the application state and passed to
/// the handlers that need it. Keyed by email; a single writer at a time via
/// the write lock.
#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user. The password is bcrypt-hashed before it is
    /// stored; a duplicate email is rejected.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), UserStoreError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(UserStoreError::AlreadyExists);
        }
        users.insert(
            email.to_string(),
            UserRecord {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                bookings: Vec::new(),
            },
        );
        tracing::info!(email, "user registered");
        Ok(())
    }

    /// Check credentials, returning the identity on success.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, UserStoreError> {
        let users = self.users.read().await;
        let record = users.get(email).ok_or(UserStoreError::NotFound)?;

        if !bcrypt::verify(password, &record.password_hash)? {
            return Err(UserStoreError::InvalidPassword);
        }
        Ok(AuthenticatedUser {
            name: record.name.clone(),
            email: record.email.clone(),
        })
    }

    /// Append a booking to the user's history. Bookings are immutable once
    /// stored.
    pub async fn add_booking(&self, email: &str, booking: Booking) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let record = users.get_mut(email).ok_or(UserStoreError::NotFound)?;
        record.bookings.push(booking);
        Ok(())
    }

    pub async fn profile(&self, email: &str) -> Result<Profile, UserStoreError> {
        let users = self.users.read().await;
        let record = users.get(email).ok_or(UserStoreError::NotFound)?;

        // Distinct origins across bookings, first-seen order.
        let mut preferred_locations: Vec<String> = Vec::new();
        for booking in &record.bookings {
            if !preferred_locations.contains(&booking.from) {
                preferred_locations.push(booking.from.clone());
            }
        }

        Ok(Profile {
            name: record.name.clone(),
            email: record.email.clone(),
            bookings: record.bookings.clone(),
            preferred_locations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn booking(from: &str) -> Booking {
        Booking {
            id: tana_core::booking::next_booking_id(),
            trip_id: 1,
            from: from.to_string(),
            to: "New York".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            departure_time: "08:00".to_string(),
            selected_seats: vec!["A1".to_string()],
            price: 50.0,
            base_price_usd: 50.0,
            discount_applied: 0.0,
            promo_code_used: None,
            passenger_name: "Abebe".to_string(),
            passenger_email: "abebe@example.com".to_string(),
            number_of_passengers: 1,
            currency: "USD".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn signup_then_login() {
        let store = UserStore::new();
        store
            .signup("Abebe", "abebe@example.com", "secret")
            .await
            .unwrap();

        let user = store.verify("abebe@example.com", "secret").await.unwrap();
        assert_eq!(user.name, "Abebe");

        assert!(matches!(
            store.verify("abebe@example.com", "wrong").await,
            Err(UserStoreError::InvalidPassword)
        ));
        assert!(matches!(
            store.verify("nobody@example.com", "secret").await,
            Err(UserStoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let store = UserStore::new();
        store.signup("A", "a@example.com", "pw").await.unwrap();
        assert!(matches!(
            store.signup("A again", "a@example.com", "pw2").await,
            Err(UserStoreError::AlreadyExists)
        ));
    }

    #[tokio::test]
    async fn profile_derives_preferred_locations_in_order() {
        let store = UserStore::new();
        store.signup("A", "a@example.com", "pw").await.unwrap();
        store
            .add_booking("a@example.com", booking("Boston"))
            .await
            .unwrap();
        store
            .add_booking("a@example.com", booking("Addis Ababa"))
            .await
            .unwrap();
        store
            .add_booking("a@example.com", booking("Boston"))
            .await
            .unwrap();

        let profile = store.profile("a@example.com").await.unwrap();
        assert_eq!(profile.bookings.len(), 3);
        assert_eq!(profile.preferred_locations, vec!["Boston", "Addis Ababa"]);
    }

    #[tokio::test]
    async fn booking_for_unknown_user_fails() {
        let store = UserStore::new();
        assert!(matches!(
            store.add_booking("ghost@example.com", booking("Boston")).await,
            Err(UserStoreError::NotFound)
        ));
    }
}
