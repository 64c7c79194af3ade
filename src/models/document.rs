//! Documents handed to the viewer.

use serde::Serialize;

/// One OpenAPI document entry: where to load it and what to call it.
///
/// Serializes to the `{ "url", "name" }` shape the viewer expects in its
/// `urls` option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentDescriptor {
    /// Fully-qualified document URL, including any query fragment.
    pub url: String,
    /// Display label.
    pub name: String,
}

impl DocumentDescriptor {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}
