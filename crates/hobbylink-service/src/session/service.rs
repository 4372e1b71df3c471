//! The session orchestration core — registration, login, logout.
//!
//! Each operation is a single unit of work against the credential store.
//! Duplicate checks here exist for friendly errors; the store's unique
//! indexes remain the source of truth under concurrent registration, and
//! the repository maps constraint violations to the same error kinds.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use hobbylink_auth::jwt::JwtEncoder;
use hobbylink_auth::password::{PasswordHasher, PasswordValidator};
use hobbylink_core::error::AppError;
use hobbylink_core::result::AppResult;
use hobbylink_database::store::UserStore;
use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::{NewUser, User};

/// Registration input. The plaintext password is consumed by hashing and
/// dropped; nothing downstream of this service ever sees it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
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
    /// Hobby associations; unknown ids are skipped, not errors.
    #[serde(default)]
    pub hobby_ids: Vec<Uuid>,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthSession {
    /// The signed session token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub user: User,
    /// The account's hobby associations.
    pub hobbies: Vec<Hobby>,
}

/// Orchestrates the account session lifecycle.
#[derive(Clone)]
pub struct SessionService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password length policy.
    validator: Arc<PasswordValidator>,
    /// Session token issuer.
    jwt_encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService").finish()
    }
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            jwt_encoder,
        }
    }

    /// Registers a new account and opens its first session.
    ///
    /// 1. Reject a duplicate email, then a duplicate username (both
    ///    case-insensitive, against every account regardless of status).
    /// 2. Hash the password and drop the plaintext.
    /// 3. Create the account (`is_active = true`, `join_date = now`,
    ///    `last_login_at = now` — registration implies a session) together
    ///    with its hobby associations, all-or-nothing.
    /// 4. Issue a session token for the new identity.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<AuthSession> {
        self.validate_registration(&req)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::duplicate_email());
        }
        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::duplicate_username());
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let new_user = NewUser {
            username: req.username,
            email: req.email,
            password_hash,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            date_of_birth: req.date_of_birth,
            profile_image_url: req.profile_image_url,
        };

        let user = self
            .users
            .create_with_hobbies(&new_user, &req.hobby_ids)
            .await?;
        let hobbies = self.users.hobbies_of(user.id).await?;
        let issued = self.jwt_encoder.issue(&user)?;

        info!(user_id = %user.id, username = %user.username, "Account registered");

        Ok(AuthSession {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
            hobbies,
        })
    }

    /// Authenticates with a username-or-email identifier and a password.
    ///
    /// Unknown identifiers and wrong passwords produce the same generic
    /// failure. A deactivated account is reported distinctly, but only
    /// after the password verified — so the distinction never leaks
    /// account existence to a caller who does not hold the credentials.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<AuthSession> {
        let mut user = self
            .users
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.hasher.verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login rejected: account deactivated");
            return Err(AppError::account_deactivated());
        }

        user.last_login_at = Some(self.users.touch_last_login(user.id).await?);

        let hobbies = self.users.hobbies_of(user.id).await?;
        let issued = self.jwt_encoder.issue(&user)?;

        info!(user_id = %user.id, "Login successful");

        Ok(AuthSession {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
            hobbies,
        })
    }

    /// Acknowledges a logout.
    ///
    /// Session tokens are stateless and cannot be invalidated server-side
    /// in this design, so this is an audit hook only: an already-issued
    /// token stays valid until its expiry.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<()> {
        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Token refresh is part of the API surface but has no implementation.
    pub async fn refresh_token(&self, _refresh_token: &str) -> AppResult<AuthSession> {
        Err(AppError::not_implemented("Token refresh is not implemented"))
    }

    /// Email verification delivery is part of the API surface but has no
    /// implementation.
    pub async fn verify_email(&self, _token: &str) -> AppResult<()> {
        Err(AppError::not_implemented(
            "Email verification is not implemented",
        ))
    }

    /// Password-reset initiation is part of the API surface but has no
    /// implementation.
    pub async fn forgot_password(&self, _email: &str) -> AppResult<()> {
        Err(AppError::not_implemented(
            "Password reset is not implemented",
        ))
    }

    /// Password-reset completion is part of the API surface but has no
    /// implementation.
    pub async fn reset_password(&self, _token: &str, _new_password: &str) -> AppResult<()> {
        Err(AppError::not_implemented(
            "Password reset is not implemented",
        ))
    }

    fn validate_registration(&self, req: &RegisterRequest) -> AppResult<()> {
        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if !req.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&req.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;
    use hobbylink_auth::jwt::JwtDecoder;
    use hobbylink_core::config::auth::AuthConfig;
    use hobbylink_core::error::ErrorKind;

    fn service_with(store: Arc<MemoryStore>) -> SessionService {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        };
        SessionService::new(
            store,
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(JwtEncoder::new(&config)),
        )
    }

    fn decoder() -> JwtDecoder {
        JwtDecoder::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        })
    }

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Mertens".to_string(),
            phone_number: None,
            date_of_birth: None,
            profile_image_url: None,
            hobby_ids: Vec::new(),
        }
    }

    #[tokio::test]
    async fn register_issues_token_for_new_identity() {
        let service = service_with(Arc::new(MemoryStore::new()));

        let session = service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        assert!(session.user.is_active);
        assert!(session.user.last_login_at.is_some());
        assert!(session.hobbies.is_empty());

        let claims = decoder().verify(&session.token).unwrap();
        assert_eq!(claims.user_id(), session.user.id);
        assert_eq!(claims.email, "alice@example.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_regardless_of_username() {
        let service = service_with(Arc::new(MemoryStore::new()));
        service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        let err = service
            .register(register_request("alice2", "alice@example.com", "Password2!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);

        // Case-insensitive match.
        let err = service
            .register(register_request("alice3", "ALICE@Example.com", "Password3!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let service = service_with(Arc::new(MemoryStore::new()));
        service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        let err = service
            .register(register_request("Alice", "other@example.com", "Password2!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateUsername);
    }

    #[tokio::test]
    async fn unknown_hobby_ids_are_silently_skipped() {
        let store = Arc::new(MemoryStore::with_hobbies(&["climbing", "chess"]));
        let known: Vec<Uuid> = store.hobby_ids();
        let service = service_with(Arc::clone(&store));

        let mut req = register_request("alice", "alice@example.com", "Password1!");
        req.hobby_ids = vec![known[0], Uuid::new_v4(), known[1], Uuid::new_v4()];

        let session = service.register(req).await.unwrap();
        let names: Vec<_> = session.hobbies.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["chess", "climbing"]);
    }

    #[tokio::test]
    async fn login_accepts_username_or_email() {
        let service = service_with(Arc::new(MemoryStore::new()));
        service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        assert!(service.login("alice", "Password1!").await.is_ok());
        assert!(service.login("alice@example.com", "Password1!").await.is_ok());
        assert!(service.login("ALICE", "Password1!").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_identifier_are_indistinguishable() {
        let service = service_with(Arc::new(MemoryStore::new()));
        service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        let wrong_password = service.login("alice", "WrongPass").await.unwrap_err();
        let unknown = service.login("nobody", "WrongPass").await.unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::InvalidCredentials);
        assert_eq!(unknown.kind, wrong_password.kind);
        assert_eq!(unknown.message, wrong_password.message);
    }

    #[tokio::test]
    async fn deactivated_account_is_reported_only_with_correct_password() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(Arc::clone(&store));
        let session = service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        store.deactivate(session.user.id);

        let err = service.login("alice", "Password1!").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccountDeactivated);

        // Wrong password on a deactivated account must stay generic.
        let err = service.login("alice", "WrongPass").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_advances_last_login() {
        let service = service_with(Arc::new(MemoryStore::new()));
        let registered = service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();
        let first = registered.user.last_login_at.unwrap();

        let logged_in = service.login("alice", "Password1!").await.unwrap();
        let second = logged_in.user.last_login_at.unwrap();
        assert!(second >= first);
    }

    #[tokio::test]
    async fn registration_scenario_end_to_end() {
        let service = service_with(Arc::new(MemoryStore::new()));

        let session = service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();
        let alice_id = session.user.id;

        let err = service
            .register(register_request("alice2", "alice@example.com", "Password2!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);

        let login = service.login("alice", "Password1!").await.unwrap();
        assert_eq!(decoder().verify(&login.token).unwrap().user_id(), alice_id);

        let err = service.login("alice", "WrongPass").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    }

    #[tokio::test]
    async fn weak_registration_input_is_rejected() {
        let service = service_with(Arc::new(MemoryStore::new()));

        let err = service
            .register(register_request("", "alice@example.com", "Password1!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service
            .register(register_request("alice", "not-an-email", "Password1!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service
            .register(register_request("alice", "alice@example.com", "short"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn logout_acknowledges_without_invalidating_tokens() {
        let service = service_with(Arc::new(MemoryStore::new()));
        let session = service
            .register(register_request("alice", "alice@example.com", "Password1!"))
            .await
            .unwrap();

        service.logout(session.user.id).await.unwrap();

        // Stateless design: the token still verifies after logout.
        assert!(decoder().verify(&session.token).is_ok());
    }

    #[tokio::test]
    async fn unbuilt_flows_report_not_implemented() {
        let service = service_with(Arc::new(MemoryStore::new()));

        let err = service.refresh_token("whatever").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);
        let err = service.verify_email("whatever").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);
        let err = service.forgot_password("a@b.c").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);
        let err = service.reset_password("t", "Password1!").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);
    }
}
