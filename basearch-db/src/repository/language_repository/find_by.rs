use basearch_api::{AccessError, AccessResult, LANGUAGE_MAX_LEN, REGION_MAX_LEN, VARIANT_MAX_LEN};

use super::repo_impl::{LanguageKey, LanguageRepositoryImpl};
use crate::models::language::{LanguageAttribute, LanguageModel};

impl LanguageRepositoryImpl {
    /// Finds the language matching every given component
    ///
    /// Absent components add no constraint, so `("en", None, None)` matches every
    /// English row and fails as ambiguous when there are several. Fully qualified
    /// lookups go through the keyed cache.
    ///
    /// # Returns
    /// * `Ok(Some(LanguageModel))` - Exactly one language matched
    /// * `Ok(None)` - Nothing matched
    /// * `Err(AccessError::InvalidArgument)` - Language absent, or a component is empty or too long
    /// * `Err(AccessError::AmbiguousResult)` - More than one language matched
    pub async fn find_by(
        &self,
        lang_code: Option<&str>,
        region_code: Option<&str>,
        variant_code: Option<&str>,
    ) -> AccessResult<Option<LanguageModel>> {
        let lang_code = lang_code
            .ok_or_else(|| AccessError::invalid_argument("language code is required"))?;
        check_component("language", lang_code, LANGUAGE_MAX_LEN)?;
        if let Some(region) = region_code {
            check_component("region", region, REGION_MAX_LEN)?;
        }
        if let Some(variant) = variant_code {
            check_component("variant", variant, VARIANT_MAX_LEN)?;
        }

        let snapshot = self.language_cache.snapshot();
        let key = match (region_code, variant_code) {
            (Some(region), Some(variant)) => Some(LanguageKey::new(lang_code, region, variant)),
            _ => None,
        };
        if let Some(hit) = key.as_ref().and_then(|k| snapshot.get(k)) {
            tracing::debug!(?key, "language cache hit");
            return Ok(Some(hit.clone()));
        }

        let mut lookup = self.languages.with(LanguageAttribute::LangCode, lang_code);
        if let Some(region) = region_code {
            lookup = lookup.and(LanguageAttribute::RegionCode, region);
        }
        if let Some(variant) = variant_code {
            lookup = lookup.and(LanguageAttribute::VariantCode, variant);
        }
        let found = lookup.find().await?;

        if let (Some(key), Some(language)) = (key, found.as_ref()) {
            if !self
                .language_cache
                .insert_keyed(snapshot.generation(), key, language.clone())
            {
                tracing::debug!("language cache full, lookup not cached");
            }
        }
        Ok(found)
    }
}

fn check_component(part: &str, value: &str, max: usize) -> AccessResult<()> {
    if value.is_empty() {
        return Err(AccessError::invalid_argument(format!("{part} code must not be empty")));
    }
    if value.chars().count() > max {
        return Err(AccessError::invalid_argument(format!(
            "{part} code '{value}' exceeds {max} characters"
        )));
    }
    Ok(())
}
