use basearch_api::{AccessError, AccessResult};

use super::repo_impl::UserRepositoryImpl;
use crate::models::user::{UserAttribute, UserModel, USERNAME_MAX_LEN};

impl UserRepositoryImpl {
    /// Finds a user by username
    ///
    /// # Returns
    /// * `Ok(Some(UserModel))` - The user
    /// * `Ok(None)` - No user has that name
    /// * `Err(AccessError::InvalidArgument)` - The name is empty or longer than a stored name can be
    pub async fn find_by_username(&self, username: &str) -> AccessResult<Option<UserModel>> {
        if username.is_empty() {
            return Err(AccessError::invalid_argument("username must not be empty"));
        }
        if username.chars().count() > USERNAME_MAX_LEN {
            return Err(AccessError::invalid_argument(format!(
                "username exceeds {USERNAME_MAX_LEN} characters"
            )));
        }

        self.users.with(UserAttribute::Username, username).find().await
    }
}
