pub mod repo_impl;
pub mod find_by_username;
pub mod set_locale_preference;

pub use repo_impl::UserRepositoryImpl;
