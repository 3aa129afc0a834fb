//! Search engine implementations.

mod duckduckgo;
mod google;

pub use duckduckgo::DuckDuckGoLite;
pub use google::GoogleCse;
