use async_trait::async_trait;

use crate::domain::{Locale, LocaleResolution, RequestContext};
use crate::error::AccessResult;

/// Locale resolution as seen by the HTTP layer
///
/// # Example
/// ```ignore
/// let resolution = resolver.resolve_locale(&RequestContext::authenticated("test")).await?;
/// render_page(resolution.locale);
/// ```
#[async_trait]
pub trait LocaleResolver: Send + Sync {
    /// Resolve the effective locale for the request
    ///
    /// # Returns
    /// * `Ok(LocaleResolution)` - The locale and the strategy that supplied it
    /// * `Err` - A store failure, or a configuration error when no default exists
    async fn resolve_locale(&self, context: &RequestContext) -> AccessResult<LocaleResolution>;

    /// Record an explicit locale choice for the request's identity
    ///
    /// # Returns
    /// * `Ok(())` - The choice was stored, or there is no identity to store it for
    /// * `Err` - The locale is not supported, or the store failed
    async fn set_locale(&self, context: &RequestContext, locale: &Locale) -> AccessResult<()>;
}
