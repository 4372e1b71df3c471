//! User profile lookup and nearby-user search.

use std::sync::Arc;

use uuid::Uuid;

use hobbylink_core::error::AppError;
use hobbylink_core::result::AppResult;
use hobbylink_core::types::Coordinate;
use hobbylink_database::store::UserStore;
use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::User;

use crate::geo;

/// Read-side user operations.
#[derive(Clone)]
pub struct UserService {
    /// Credential store.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Loads a user's profile together with their hobby associations.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<(User, Vec<Hobby>)> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let hobbies = self.users.hobbies_of(user_id).await?;
        Ok((user, hobbies))
    }

    /// Lists active users whose position is within `radius_km` of
    /// `center`, inclusive. Users without a complete coordinate pair
    /// never appear in the result.
    pub async fn nearby(&self, center: Coordinate, radius_km: f64) -> AppResult<Vec<User>> {
        let located = self.users.find_located().await?;
        Ok(geo::filter_within_radius(located, center, radius_km, |u| {
            u.coordinate()
        }))
    }
}
