//! Core logic for the document explorer.
//!
//! - [`resolver`] - Mount discovery and document list construction
//! - [`settings`] - Persisted depth/width settings
//! - [`viewer`] - Bridge to the Swagger UI viewer
//! - [`error`] - Error types for each domain

pub mod error;
pub mod resolver;
pub mod settings;
pub mod viewer;

pub use resolver::{
    DiscoveryStatus, HttpMetaSource, HttpMountSource, Resolution, build_documents, discover,
    mount_issues, page_count,
};
pub use settings::{LocalStorageStore, load_settings, save_depth, save_width};
