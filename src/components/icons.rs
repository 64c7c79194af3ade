//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeftRight as Width, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuLayers as Depth, LuRotateCw as Reload, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Reload, BsArrowLeftRight as Width, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsExclamationTriangle as Warning, BsLayers as Depth,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DEPTH, Depth);
themed_icon!(WIDTH, Width);
themed_icon!(RELOAD, Reload);
themed_icon!(WARNING, Warning);
