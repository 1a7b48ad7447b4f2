pub mod resolution_chain;

pub use resolution_chain::LocaleResolutionChain;
