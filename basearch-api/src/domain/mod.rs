pub mod locale;
pub mod locale_resolution;
pub mod request_context;

pub use locale::*;
pub use locale_resolution::*;
pub use request_context::*;
