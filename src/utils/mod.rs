//! Utility modules for web, DOM, and URL operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`join_path`] - URL path assembly

pub mod dom;
mod fetch;
mod url;

pub use fetch::fetch_json;
pub use url::join_path;
