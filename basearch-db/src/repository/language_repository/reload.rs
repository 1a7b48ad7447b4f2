use basearch_api::AccessResult;

use super::repo_impl::LanguageRepositoryImpl;

impl LanguageRepositoryImpl {
    /// Re-reads the catalog and swaps it in as one snapshot; returns its generation.
    ///
    /// The default is taken from the reloaded rows when exactly one is flagged, otherwise
    /// left for [`Self::find_default`] to resolve and report.
    pub async fn reload(&self) -> AccessResult<u64> {
        let all = self.languages.list_all().await?;
        let mut defaults = all.iter().filter(|l| l.is_default);
        let default = match (defaults.next(), defaults.next()) {
            (Some(default), None) => Some(default.clone()),
            _ => None,
        };

        let count = all.len();
        let generation = self.language_cache.replace(all, default);
        tracing::info!(generation, languages = count, "language catalog reloaded");
        Ok(generation)
    }

    /// Drops the cached catalog; the next read loads it again.
    pub fn invalidate(&self) -> u64 {
        let generation = self.language_cache.invalidate();
        tracing::info!(generation, "language catalog invalidated");
        generation
    }
}
