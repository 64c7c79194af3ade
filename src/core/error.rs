//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`DiscoveryError`] - Mount discovery failures
//! - [`SettingsError`] - localStorage operations for view settings
//! - [`ViewerError`] - Handing documents to the viewer library
//! - [`DataQualityIssue`] - Unexpected but recoverable discovery data

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx status
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// The discovery endpoint could not produce a mount list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mount discovery at {url} failed: {source}")]
pub struct DiscoveryError {
    pub url: String,
    #[source]
    pub source: FetchError,
}

/// View settings storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("localStorage not available")]
    StorageUnavailable,
    #[error("failed to save to localStorage")]
    SaveFailed,
}

/// Errors raised while starting the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("Browser window not available")]
    NoWindow,
    /// The viewer script was not loaded by the host page
    #[error("viewer library `{0}` is not loaded")]
    NotLoaded(&'static str),
    #[error("viewer container `#{0}` not found")]
    MissingContainer(String),
    #[error("failed to build viewer configuration: {0}")]
    ConfigFailed(String),
    #[error("viewer initialization failed: {0}")]
    InitFailed(String),
}

/// Recoverable problems in discovery data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataQualityIssue {
    /// The instance path has no `node=<NAME>` key; the id is shown instead.
    #[error("mount {id}: no node name in instance `{instance}`, using id as name")]
    MalformedInstance { id: String, instance: String },
    /// The entry has no usable id, so its document cannot be addressed.
    #[error("mount without id skipped (instance `{instance}`)")]
    MissingId { instance: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_error_message() {
        let err = DiscoveryError {
            url: "http://odl:8181/openapi/api/v3/mounts".to_string(),
            source: FetchError::HttpError(401),
        };
        assert_eq!(
            err.to_string(),
            "mount discovery at http://odl:8181/openapi/api/v3/mounts failed: HTTP error: 401"
        );
    }

    #[test]
    fn test_data_quality_message() {
        let issue = DataQualityIssue::MalformedInstance {
            id: "4".to_string(),
            instance: "/topology=t/".to_string(),
        };
        assert!(issue.to_string().contains("using id as name"));
    }

    #[test]
    fn test_missing_id_message() {
        let issue = DataQualityIssue::MissingId {
            instance: "/topology=t/node=r2/".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "mount without id skipped (instance `/topology=t/node=r2/`)"
        );
    }
}
