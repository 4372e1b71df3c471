//! In-memory credential store used by service tests.
//!
//! Mirrors the behavior the sqlx repository gets from the database:
//! case-insensitive uniqueness, hobby attachment that skips unknown
//! catalog ids, and a monotonic last-login timestamp.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use hobbylink_core::error::AppError;
use hobbylink_core::result::AppResult;
use hobbylink_database::store::UserStore;
use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::{NewUser, User};

/// In-memory `UserStore` implementation.
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    hobbies: Vec<Hobby>,
    associations: Mutex<Vec<(Uuid, Uuid)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_hobbies(&[])
    }

    pub fn with_hobbies(names: &[&str]) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            hobbies: names
                .iter()
                .map(|name| Hobby {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    category: None,
                })
                .collect(),
            associations: Mutex::new(Vec::new()),
        }
    }

    pub fn hobby_ids(&self) -> Vec<Uuid> {
        self.hobbies.iter().map(|h| h.id).collect()
    }

    pub fn set_location(&self, user_id: Uuid, latitude: f64, longitude: f64) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.latitude = Some(latitude);
            user.longitude = Some(longitude);
        }
    }

    pub fn deactivate(&self, user_id: Uuid) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| {
                u.username.eq_ignore_ascii_case(identifier)
                    || u.email.eq_ignore_ascii_case(identifier)
            })
            .cloned())
    }

    async fn create_with_hobbies(&self, data: &NewUser, hobby_ids: &[Uuid]) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        // The unique-index behavior of the real store.
        if users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&data.username))
        {
            return Err(AppError::duplicate_username());
        }
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(AppError::duplicate_email());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            phone_number: data.phone_number.clone(),
            date_of_birth: data.date_of_birth,
            profile_image_url: data.profile_image_url.clone(),
            cover_image_url: None,
            bio: None,
            city: None,
            latitude: None,
            longitude: None,
            is_active: true,
            is_verified: false,
            join_date: now,
            last_login_at: Some(now),
        };
        users.push(user.clone());

        let mut associations = self.associations.lock().unwrap();
        for hobby_id in hobby_ids {
            if self.hobbies.iter().any(|h| h.id == *hobby_id) {
                associations.push((user.id, *hobby_id));
            }
        }

        Ok(user)
    }

    async fn touch_last_login(&self, user_id: Uuid) -> AppResult<DateTime<Utc>> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let now = Utc::now();
        let advanced = user.last_login_at.map_or(now, |prev| prev.max(now));
        user.last_login_at = Some(advanced);
        Ok(advanced)
    }

    async fn hobbies_of(&self, user_id: Uuid) -> AppResult<Vec<Hobby>> {
        let associations = self.associations.lock().unwrap();
        let mut hobbies: Vec<Hobby> = self
            .hobbies
            .iter()
            .filter(|h| associations.iter().any(|(u, id)| *u == user_id && *id == h.id))
            .cloned()
            .collect();
        hobbies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hobbies)
    }

    async fn find_located(&self) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_active && u.latitude.is_some() && u.longitude.is_some())
            .cloned()
            .collect())
    }
}
