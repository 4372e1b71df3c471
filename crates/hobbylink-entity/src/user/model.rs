//! User entity model.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hobbylink_core::types::Coordinate;

/// A registered account in the HobbyLink credential store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name (case-insensitive uniqueness).
    pub username: String,
    /// Email address (case-insensitive uniqueness).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Date of birth (optional).
    pub date_of_birth: Option<NaiveDate>,
    /// Profile image URL (optional).
    pub profile_image_url: Option<String>,
    /// Cover image URL (optional).
    pub cover_image_url: Option<String>,
    /// Short free-text bio (optional).
    pub bio: Option<String>,
    /// City name (optional).
    pub city: Option<String>,
    /// Latitude in decimal degrees (optional, paired with longitude).
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees (optional, paired with latitude).
    pub longitude: Option<f64>,
    /// Whether the account may log in. `false` rejects login.
    pub is_active: bool,
    /// Whether the email was verified. Informational only; login does
    /// not require it.
    pub is_verified: bool,
    /// When the account was created. Immutable after creation.
    pub join_date: DateTime<Utc>,
    /// Last successful login time. Only ever advances forward.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns first and last name joined with a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the user's age in whole years, if a birth date is known.
    pub fn age(&self) -> Option<i32> {
        let dob = self.date_of_birth?;
        let today = Utc::now().date_naive();
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        (age >= 0).then_some(age)
    }

    /// Returns the user's position when both latitude and longitude are
    /// set. A record with only one component has no usable position.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.latitude, self.longitude)
    }
}

/// Data required to create a new account.
///
/// Carries the password hash, never the plaintext: hashing happens before
/// this struct is built and the plaintext is dropped there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Date of birth (optional).
    pub date_of_birth: Option<NaiveDate>,
    /// Profile image URL (optional).
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Mertens".to_string(),
            phone_number: None,
            date_of_birth: None,
            profile_image_url: None,
            cover_image_url: None,
            bio: None,
            city: None,
            latitude: None,
            longitude: None,
            is_active: true,
            is_verified: false,
            join_date: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample_user().full_name(), "Alice Mertens");
    }

    #[test]
    fn coordinate_requires_both_components() {
        let mut user = sample_user();
        assert!(user.coordinate().is_none());

        user.latitude = Some(52.52);
        assert!(user.coordinate().is_none());

        user.longitude = Some(13.405);
        let coord = user.coordinate().unwrap();
        assert_eq!(coord.latitude, 52.52);
        assert_eq!(coord.longitude, 13.405);
    }

    #[test]
    fn age_is_none_without_birth_date() {
        assert!(sample_user().age().is_none());
    }

    #[test]
    fn age_counts_whole_years() {
        let mut user = sample_user();
        user.date_of_birth = Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        let age = user.age().unwrap();
        assert!(age >= 30);
    }
}
