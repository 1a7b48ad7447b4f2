use async_trait::async_trait;
use basearch_api::{
    AccessError, AccessResult, Locale, LocaleResolution, LocaleResolver, LocaleSource, RequestContext,
};
use std::sync::Arc;

use crate::models::user::{UserModel, USERNAME_MAX_LEN};
use crate::repository::language_repository::LanguageRepositoryImpl;
use crate::repository::user_repository::UserRepositoryImpl;

/// Resolves the locale of a request from, in order, the stored preference of the
/// authenticated user, the negotiated request locale and the default language.
///
/// A request locale accepted for a user without a stored preference is written back
/// as that user's preference.
pub struct LocaleResolutionChain {
    languages: Arc<LanguageRepositoryImpl>,
    users: Arc<UserRepositoryImpl>,
}

impl LocaleResolutionChain {
    pub fn new(languages: Arc<LanguageRepositoryImpl>, users: Arc<UserRepositoryImpl>) -> Self {
        Self { languages, users }
    }

    /// The stored user behind the request identity.
    ///
    /// An identity that cannot be a stored username has no row and counts as anonymous.
    async fn current_user(&self, context: &RequestContext) -> AccessResult<Option<UserModel>> {
        match context.identity().filter(|name| !name.is_empty()) {
            Some(username) if username.chars().count() > USERNAME_MAX_LEN => {
                tracing::debug!(length = username.chars().count(), "identity too long for a stored user");
                Ok(None)
            }
            Some(username) => self.users.find_by_username(username).await,
            None => Ok(None),
        }
    }

    /// The user's stored locale if it parses and is supported; anything else counts as absent.
    async fn stored_preference(&self, user: &UserModel) -> AccessResult<Option<Locale>> {
        let Some(stored) = user.stored_locale() else {
            return Ok(None);
        };

        let locale = match Locale::parse(stored) {
            Ok(locale) => locale,
            Err(e) => {
                tracing::warn!(username = %user.username, stored, error = %e, "ignoring unparseable locale preference");
                return Ok(None);
            }
        };

        if self.languages.find_by_locale(&locale).await?.is_none() {
            tracing::warn!(username = %user.username, stored, "ignoring unsupported locale preference");
            return Ok(None);
        }
        Ok(Some(locale))
    }

    async fn default_locale(&self) -> AccessResult<Locale> {
        let default = self.languages.find_default().await?;
        default.to_locale().map_err(|e| {
            AccessError::Configuration(format!("default language is not a valid locale: {e}"))
        })
    }
}

#[async_trait]
impl LocaleResolver for LocaleResolutionChain {
    async fn resolve_locale(&self, context: &RequestContext) -> AccessResult<LocaleResolution> {
        let user = self.current_user(context).await?;

        if let Some(user) = &user {
            if let Some(locale) = self.stored_preference(user).await? {
                return Ok(LocaleResolution::new(locale, LocaleSource::Preference));
            }
        }

        if let Some(candidate) = &context.negotiated_locale {
            if self.languages.find_by_locale(candidate).await?.is_some() {
                let mut resolution = LocaleResolution::new(candidate.clone(), LocaleSource::Request);
                if let Some(user) = &user {
                    resolution.preference_written = self.users.store_first_locale(user, candidate).await?;
                }
                return Ok(resolution);
            }
            tracing::debug!(locale = %candidate, "negotiated locale is not supported");
        }

        Ok(LocaleResolution::new(self.default_locale().await?, LocaleSource::Default))
    }

    async fn set_locale(&self, context: &RequestContext, locale: &Locale) -> AccessResult<()> {
        if self.languages.find_by_locale(locale).await?.is_none() {
            return Err(AccessError::invalid_argument(format!("locale '{locale}' is not supported")));
        }

        match self.current_user(context).await? {
            Some(user) => {
                self.users.set_locale_preference(&user, locale).await?;
            }
            None => tracing::debug!(%locale, "no stored preference for anonymous request"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::EntityStore;
    use crate::gateway::InMemoryStore;
    use crate::test_helper::{language, seeded_store};

    struct Fixture {
        store: InMemoryStore,
        chain: LocaleResolutionChain,
        users: Arc<UserRepositoryImpl>,
    }

    fn fixture(store: InMemoryStore) -> Fixture {
        let entity_store = EntityStore::new(Arc::new(store.clone()));
        let languages = Arc::new(LanguageRepositoryImpl::new(
            &entity_store,
            LanguageRepositoryImpl::new_cache(),
        ));
        let users = Arc::new(UserRepositoryImpl::new(&entity_store));
        Fixture {
            store,
            chain: LocaleResolutionChain::new(languages, users.clone()),
            users,
        }
    }

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[tokio::test]
    async fn test_stored_preference_wins() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::authenticated("maria").with_negotiated_locale(locale("fr"));

        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("es-ES"));
        assert_eq!(resolution.source, LocaleSource::Preference);
        assert!(!resolution.preference_written);
        assert_eq!(f.store.update_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_request_locale_is_written_back() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::authenticated("test").with_negotiated_locale(locale("es"));

        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("es"));
        assert_eq!(resolution.source, LocaleSource::Request);
        assert!(resolution.preference_written);

        let test = f.users.find_by_username("test").await?.unwrap();
        assert_eq!(test.stored_locale(), Some("es"));

        // The preference now wins over a different request locale.
        let context = RequestContext::authenticated("test").with_negotiated_locale(locale("fr"));
        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.source, LocaleSource::Preference);
        assert_eq!(resolution.locale, locale("es"));
        assert_eq!(f.store.update_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_request_locale_falls_back_to_default() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::authenticated("test").with_negotiated_locale(locale("de-DE"));

        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("en-US"));
        assert_eq!(resolution.source, LocaleSource::Default);
        assert!(!resolution.preference_written);
        assert_eq!(f.store.update_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_request_locale_must_match_exactly() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::anonymous().with_negotiated_locale(locale("en"));

        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.source, LocaleSource::Default);
        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_request_is_never_written() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());

        let context = RequestContext::anonymous().with_negotiated_locale(locale("fr"));
        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("fr"));
        assert!(!resolution.preference_written);

        let resolution = f.chain.resolve_locale(&RequestContext::anonymous()).await?;
        assert_eq!(resolution.locale, locale("en-US"));
        assert_eq!(resolution.source, LocaleSource::Default);
        assert_eq!(f.store.update_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_identity_behaves_as_anonymous() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::authenticated("nobody").with_negotiated_locale(locale("es-ES"));

        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("es-ES"));
        assert_eq!(resolution.source, LocaleSource::Request);
        assert!(!resolution.preference_written);
        Ok(())
    }

    #[tokio::test]
    async fn test_oversized_identity_behaves_as_anonymous() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let identity = "a.very.long.sso.identity@some-corporate-domain.example.com";
        assert!(identity.len() > USERNAME_MAX_LEN);

        let context = RequestContext::authenticated(identity).with_negotiated_locale(locale("fr"));
        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("fr"));
        assert_eq!(resolution.source, LocaleSource::Request);
        assert!(!resolution.preference_written);

        f.chain.set_locale(&context, &locale("fr")).await?;
        assert_eq!(f.store.update_count(), 0);
        assert_eq!(f.store.query_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_preferences_are_skipped_not_clobbered() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());

        for username in ["stale", "garbage"] {
            let context = RequestContext::authenticated(username).with_negotiated_locale(locale("fr"));
            let resolution = f.chain.resolve_locale(&context).await?;
            assert_eq!(resolution.locale, locale("fr"));
            assert_eq!(resolution.source, LocaleSource::Request);
            assert!(!resolution.preference_written);
        }

        let stale = f.users.find_by_username("stale").await?.unwrap();
        assert_eq!(stale.stored_locale(), Some("xx-YY"));
        assert_eq!(f.store.update_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_default_is_reported() {
        let store = InMemoryStore::new();
        store.insert(&language("fr", None, None, false));
        let f = fixture(store);

        let err = f.chain.resolve_locale(&RequestContext::anonymous()).await.unwrap_err();
        assert!(matches!(err, AccessError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let f = fixture(seeded_store());
        f.store.set_unavailable(true);

        let err = f
            .chain
            .resolve_locale(&RequestContext::authenticated("maria"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_set_locale_overwrites_preference() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        let context = RequestContext::authenticated("maria");

        f.chain.set_locale(&context, &locale("ca-ES-valencia")).await?;
        let resolution = f.chain.resolve_locale(&context).await?;
        assert_eq!(resolution.locale, locale("ca-ES-valencia"));
        assert_eq!(resolution.source, LocaleSource::Preference);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_locale_rejects_unsupported() {
        let f = fixture(seeded_store());
        let err = f
            .chain
            .set_locale(&RequestContext::authenticated("maria"), &locale("de"))
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(f.store.update_count(), 0);
    }

    #[tokio::test]
    async fn test_set_locale_anonymous_is_noop() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let f = fixture(seeded_store());
        f.chain.set_locale(&RequestContext::anonymous(), &locale("fr")).await?;
        assert_eq!(f.store.update_count(), 0);
        Ok(())
    }
}
