pub mod locale_resolver;

pub use locale_resolver::*;
