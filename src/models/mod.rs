//! Data models for the document explorer.
//!
//! Contains domain types for:
//! - [`MountEntry`] - Mounted devices reported by the discovery endpoint
//! - [`DocumentDescriptor`] - Documents handed to the viewer
//! - [`ModuleMetadata`] - Module counts used to bound pagination
//! - [`ViewSettings`], [`Page`], [`QueryParams`] - Query parameters for every document

mod document;
mod meta;
mod mount;
mod view;

pub use document::DocumentDescriptor;
pub use meta::ModuleMetadata;
pub use mount::MountEntry;
pub use view::{Page, QueryParams, ViewSettings};
