pub mod repo_impl;
pub mod find_all;
pub mod find_by;
pub mod find_by_locale;
pub mod find_default;
pub mod reload;

pub use repo_impl::{
    LanguageCatalogCache, LanguageKey, LanguageRepositoryImpl, DEFAULT_LANGUAGE_CACHE_CAPACITY,
};
