//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Endpoint paths are deployment-specific and relative to the page origin.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the control bar.
pub const APP_NAME: &str = "RestConf Documentation";

// =============================================================================
// Endpoint Configuration
// =============================================================================

/// Path of the controller's own document.
pub const SINGLE_DOCUMENT_PATH: &str = "/openapi/api/v3/single";

/// Path under which each mounted device's document lives (`<path>/<id>`).
pub const MOUNTS_PATH: &str = "/openapi/api/v3/mounts";

/// Path of the mount discovery endpoint.
pub const DISCOVERY_PATH: &str = MOUNTS_PATH;

/// Appended to a document path to get its module counts.
pub const META_SUFFIX: &str = "/meta";

// =============================================================================
// Document Labels
// =============================================================================

/// Display name of the controller document.
pub const CONTROLLER_LABEL: &str = "Controller resources - RestConf RFC 8040";

/// Appended to a device name to form its document label.
pub const DEVICE_LABEL_SUFFIX: &str = " resources - RestConf RFC 8040";

// =============================================================================
// View Settings
// =============================================================================

/// Default document depth when none is stored.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default document width when none is stored.
pub const DEFAULT_WIDTH: u32 = 5;

/// Default number of modules per page when pagination is enabled.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// localStorage keys for persisted settings.
pub mod storage_keys {
    pub const DEPTH: &str = "depth";
    pub const WIDTH: &str = "width";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Viewer Configuration
// =============================================================================

/// DOM id of the element the viewer renders into.
pub const VIEWER_DOM_ID: &str = "swagger-ui";

/// Global function exported by `swagger-ui-bundle.js`.
pub const VIEWER_BUNDLE_GLOBAL: &str = "SwaggerUIBundle";

/// Global preset exported by `swagger-ui-standalone-preset.js`.
pub const VIEWER_STANDALONE_PRESET_GLOBAL: &str = "SwaggerUIStandalonePreset";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
