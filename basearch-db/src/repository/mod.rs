pub mod find_all;
pub mod find_by_id;
pub mod language_repository;
pub mod user_repository;

// Re-exports
pub use find_all::*;
pub use find_by_id::*;
pub use language_repository::{LanguageCatalogCache, LanguageKey, LanguageRepositoryImpl};
pub use user_repository::UserRepositoryImpl;
