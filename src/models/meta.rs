//! Module counts reported by a document's `/meta` endpoint.
//!
//! The controller answers `GET <document>/meta?offset=..&limit=..` with a
//! `metadata` object. Only the counts are used here; unknown fields are
//! ignored and missing ones stay `None`.

use serde::Deserialize;

/// Body of a `/meta` response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleMetadata {
    #[serde(default)]
    metadata: Counts,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Counts {
    #[serde(default)]
    total_modules: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl ModuleMetadata {
    #[cfg(test)]
    pub fn with_modules(total_modules: u32) -> Self {
        Self {
            metadata: Counts {
                total_modules: Some(total_modules),
                total_pages: None,
            },
        }
    }

    /// Number of pages of `limit` modules.
    ///
    /// Uses the reported page count when present, otherwise derives it from
    /// the module count. `None` when neither is known.
    pub fn pages(&self, limit: u32) -> Option<u32> {
        self.metadata.total_pages.or_else(|| {
            let modules = self.metadata.total_modules?;
            (limit > 0).then(|| modules.div_ceil(limit))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_page_count_wins() {
        let json = r#"{"metadata": {"totalModules": 95, "totalPages": 7, "currentPage": 1}}"#;
        let meta: ModuleMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(meta.pages(20), Some(7));
    }

    #[test]
    fn test_page_count_from_modules() {
        let json = r#"{"metadata": {"totalModules": 41, "configModules": 30}}"#;
        let meta: ModuleMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(meta.pages(20), Some(3));
        assert_eq!(meta.pages(41), Some(1));
        assert_eq!(meta.pages(0), None);
    }

    #[test]
    fn test_unknown_shape_has_no_count() {
        let meta: ModuleMetadata = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert_eq!(meta.pages(20), None);
    }
}
