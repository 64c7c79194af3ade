//! UI components built with Leptos.
//!
//! - [`docs`] - Discovery status and viewer host (main entry point)
//! - [`controls`] - Depth/width inputs, pager and reload button
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod controls;
pub mod docs;
pub mod icons;

pub use controls::{ControlBar, Pager};
pub use docs::ApiDocs;
