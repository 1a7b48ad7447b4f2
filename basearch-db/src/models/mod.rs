pub mod attribute;
pub mod entity;
pub mod identifiable;
pub mod language;
pub mod table;
pub mod user;

// Re-exports
pub use attribute::*;
pub use entity::*;
pub use identifiable::*;
pub use language::*;
pub use table::*;
pub use user::*;
