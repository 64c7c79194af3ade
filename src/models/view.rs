//! View parameters that shape every generated document.
//!
//! - [`ViewSettings`] - persisted `depth`/`width` limits
//! - [`Page`] - offset/limit window over a document's modules
//! - [`QueryParams`] - the query fragment built from both

use crate::config::{DEFAULT_DEPTH, DEFAULT_PAGE_LIMIT, DEFAULT_WIDTH};

// ============================================================================
// ViewSettings
// ============================================================================

/// Depth and width limits for generated documents.
///
/// A value of `0` means "no limit" and suppresses the query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    pub depth: u32,
    pub width: u32,
}

impl ViewSettings {
    pub fn new(depth: u32, width: u32) -> Self {
        Self { depth, width }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, DEFAULT_WIDTH)
    }
}

// ============================================================================
// Page
// ============================================================================

/// Offset pagination over the modules of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    /// First page with the given limit.
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// The following page.
    pub fn next(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self
        }
    }

    /// The preceding page, clamped at offset 0.
    pub fn previous(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    /// 1-based page number for display.
    pub fn number(&self) -> u32 {
        if self.limit == 0 {
            1
        } else {
            self.offset / self.limit + 1
        }
    }

    /// Whether this is the last of `total_pages` pages (or past it).
    pub fn is_last(&self, total_pages: u32) -> bool {
        self.number() >= total_pages
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_LIMIT)
    }
}

// ============================================================================
// QueryParams
// ============================================================================

/// Everything that ends up in a document URL's query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub depth: u32,
    pub width: u32,
    pub page: Option<Page>,
}

impl QueryParams {
    pub fn new(settings: &ViewSettings, page: Option<Page>) -> Self {
        Self {
            depth: settings.depth,
            width: settings.width,
            page,
        }
    }

    /// Render the query fragment.
    ///
    /// Parameters with value `0` are omitted. Included parameters keep the
    /// order depth, width, offset, limit. Returns an empty string (no `?`)
    /// when nothing is included.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("depth", self.depth), ("width", self.width)];
        if let Some(page) = self.page {
            pairs.push(("offset", page.offset));
            pairs.push(("limit", page.limit));
        }

        let included: Vec<String> = pairs
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();

        if included.is_empty() {
            String::new()
        } else {
            format!("?{}", included.join("&"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
