use basearch_api::{AccessError, AccessResult, Locale};
use heapless::String as HeaplessString;

use super::repo_impl::UserRepositoryImpl;
use crate::models::user::UserModel;

impl UserRepositoryImpl {
    /// Stores `locale` as the user's preference, replacing any previous value.
    pub async fn set_locale_preference(&self, user: &UserModel, locale: &Locale) -> AccessResult<UserModel> {
        let tag = locale.to_tag();
        let stored = HeaplessString::try_from(tag.as_str()).map_err(|_| {
            AccessError::invalid_argument(format!("locale tag '{tag}' is too long to store"))
        })?;

        let mut updated = user.clone();
        updated.locale = Some(stored);
        self.users.update(&updated).await?;
        tracing::info!(username = %user.username, locale = %tag, "stored locale preference");
        Ok(updated)
    }

    /// Stores `locale` only when the user has no preference yet.
    ///
    /// A present preference is kept even when it no longer parses or is unsupported.
    /// Returns whether a write happened.
    pub async fn store_first_locale(&self, user: &UserModel, locale: &Locale) -> AccessResult<bool> {
        if user.stored_locale().is_some() {
            return Ok(false);
        }
        self.set_locale_preference(user, locale).await?;
        Ok(true)
    }
}
