//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::User;
use hobbylink_service::session::AuthSession;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Authentication response for register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// Always null: the refresh protocol is declared but unbuilt, and the
    /// field documents that gap in the wire shape.
    pub refresh_token: Option<String>,
    /// Public projection of the account.
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
            refresh_token: None,
            user: UserResponse::from_parts(session.user, session.hobbies),
        }
    }
}

/// Public-safe projection of an account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Derived full name.
    pub full_name: String,
    /// Profile image URL.
    pub profile_image_url: Option<String>,
    /// Cover image URL.
    pub cover_image_url: Option<String>,
    /// Bio.
    pub bio: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Derived age in whole years.
    pub age: Option<i32>,
    /// City.
    pub city: Option<String>,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the email was verified.
    pub is_verified: bool,
    /// Account creation time.
    pub join_date: DateTime<Utc>,
    /// Last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Hobby associations.
    pub hobbies: Vec<HobbyResponse>,
}

impl UserResponse {
    /// Builds the projection from an account and its hobby list.
    pub fn from_parts(user: User, hobbies: Vec<Hobby>) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            age: user.age(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            cover_image_url: user.cover_image_url,
            bio: user.bio,
            phone_number: user.phone_number,
            date_of_birth: user.date_of_birth,
            city: user.city,
            latitude: user.latitude,
            longitude: user.longitude,
            is_active: user.is_active,
            is_verified: user.is_verified,
            join_date: user.join_date,
            last_login_at: user.last_login_at,
            hobbies: hobbies.into_iter().map(HobbyResponse::from).collect(),
        }
    }
}

/// Hobby summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbyResponse {
    /// Hobby ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: Option<String>,
}

impl From<Hobby> for HobbyResponse {
    fn from(hobby: Hobby) -> Self {
        Self {
            id: hobby.id,
            name: hobby.name,
            category: hobby.category,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Version.
    pub version: String,
    /// Whether the database answered the connectivity probe.
    pub database: bool,
}
