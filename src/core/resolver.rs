//! Mount discovery and document list construction.
//!
//! Resolution runs in two halves:
//!
//! 1. [`discover`] asks a [`MountSource`] for the currently mounted devices.
//! 2. [`build_documents`] turns the discovery result into the ordered list of
//!    [`DocumentDescriptor`]s: the controller first, then one entry per device
//!    in response order.
//!
//! The second half is pure, so the UI can rebuild the list when settings or
//! the page change without asking the controller again.
//!
//! [`page_count`] asks each document's `/meta` endpoint how many pages of
//! modules it has, so the pager knows where the last page is.

use serde_json::Value;

use crate::config::{
    CONTROLLER_LABEL, DEVICE_LABEL_SUFFIX, DISCOVERY_PATH, META_SUFFIX, MOUNTS_PATH,
    SINGLE_DOCUMENT_PATH,
};
use crate::core::error::{DataQualityIssue, DiscoveryError, FetchError};
use crate::models::{
    DocumentDescriptor, ModuleMetadata, MountEntry, Page, QueryParams, ViewSettings,
};
use crate::utils::{fetch_json, join_path};

// ============================================================================
// Sources
// ============================================================================

/// Anything that can list mounted devices from a discovery URL.
pub trait MountSource {
    fn fetch_mounts(&self, url: &str)
    -> impl Future<Output = Result<Vec<MountEntry>, FetchError>>;
}

/// Anything that can read a document's module counts.
pub trait MetaSource {
    fn fetch_meta(&self, url: &str) -> impl Future<Output = Result<ModuleMetadata, FetchError>>;
}

/// Discovery over HTTP using the Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpMountSource;

impl MountSource for HttpMountSource {
    async fn fetch_mounts(&self, url: &str) -> Result<Vec<MountEntry>, FetchError> {
        let entries: Vec<Value> = fetch_json(url).await?;
        Ok(mounts_from_json(entries))
    }
}

/// `/meta` lookups over HTTP using the Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpMetaSource;

impl MetaSource for HttpMetaSource {
    async fn fetch_meta(&self, url: &str) -> Result<ModuleMetadata, FetchError> {
        fetch_json(url).await
    }
}

/// Decode the elements of a mount list one by one.
///
/// Only a body that is not a JSON array fails discovery; bad elements are
/// kept as (partially) empty entries and reported by [`build_documents`].
pub fn mounts_from_json(entries: Vec<Value>) -> Vec<MountEntry> {
    entries.into_iter().map(MountEntry::from_json).collect()
}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of the discovery step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscoveryStatus {
    /// The endpoint answered; this many devices got a document.
    Available { devices: usize },
    /// The endpoint could not be used; only the controller is listed.
    Unavailable(DiscoveryError),
}

/// Documents for the viewer plus what happened while producing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Controller entry first, then devices in discovery order. Never empty.
    pub documents: Vec<DocumentDescriptor>,
    pub discovery: DiscoveryStatus,
    pub issues: Vec<DataQualityIssue>,
}

impl Resolution {
    /// The controller's document.
    pub fn controller(&self) -> Option<&DocumentDescriptor> {
        self.documents.first()
    }

    /// Documents of mounted devices.
    pub fn devices(&self) -> &[DocumentDescriptor] {
        self.documents.get(1..).unwrap_or_default()
    }

    pub fn is_discovery_available(&self) -> bool {
        matches!(self.discovery, DiscoveryStatus::Available { .. })
    }
}

/// Full URL of the discovery endpoint.
pub fn discovery_url(base_url: &str) -> String {
    join_path(base_url, DISCOVERY_PATH)
}

/// Ask `source` for the mounted devices under `base_url`.
pub async fn discover<S: MountSource>(
    source: &S,
    base_url: &str,
) -> Result<Vec<MountEntry>, DiscoveryError> {
    let url = discovery_url(base_url);
    source
        .fetch_mounts(&url)
        .await
        .map_err(|err| DiscoveryError { url, source: err })
}

/// Build the ordered document list from a discovery result.
pub fn build_documents(
    base_url: &str,
    params: &QueryParams,
    discovered: &Result<Vec<MountEntry>, DiscoveryError>,
) -> Resolution {
    let query = params.to_query_string();
    let mut issues = Vec::new();

    let mut documents = vec![DocumentDescriptor::new(
        format!("{}{}", join_path(base_url, SINGLE_DOCUMENT_PATH), query),
        CONTROLLER_LABEL,
    )];

    let discovery = match discovered {
        Ok(mounts) => {
            let mounts_base = join_path(base_url, MOUNTS_PATH);
            for mount in mounts {
                let (name, issue) = inspect(mount);
                issues.extend(issue);
                if let Some(name) = name {
                    documents.push(DocumentDescriptor::new(
                        format!("{}/{}{}", mounts_base, mount.id, query),
                        format!("{}{}", name, DEVICE_LABEL_SUFFIX),
                    ));
                }
            }
            DiscoveryStatus::Available {
                devices: documents.len() - 1,
            }
        }
        Err(err) => DiscoveryStatus::Unavailable(err.clone()),
    };

    Resolution {
        documents,
        discovery,
        issues,
    }
}

/// Discover mounts and build the document list in one pass.
pub async fn resolve<S: MountSource>(
    source: &S,
    base_url: &str,
    settings: &ViewSettings,
    page: Option<Page>,
) -> Resolution {
    let discovered = discover(source, base_url).await;
    build_documents(base_url, &QueryParams::new(settings, page), &discovered)
}

/// Data problems in a mount list.
///
/// Same issues [`build_documents`] reports, but independent of the query
/// parameters, so they can be logged once per discovery.
pub fn mount_issues(mounts: &[MountEntry]) -> Vec<DataQualityIssue> {
    mounts.iter().filter_map(|mount| inspect(mount).1).collect()
}

/// Display name of a device and any problem with its entry.
///
/// The name falls back to the mount id for malformed instance paths. It is
/// `None` when the entry has no id, since there is no URL to list.
fn inspect(mount: &MountEntry) -> (Option<&str>, Option<DataQualityIssue>) {
    if mount.id.is_empty() {
        let issue = DataQualityIssue::MissingId {
            instance: mount.instance.clone(),
        };
        return (None, Some(issue));
    }

    match mount.node_name() {
        Some(name) => (Some(name), None),
        None => {
            let issue = DataQualityIssue::MalformedInstance {
                id: mount.id.clone(),
                instance: mount.instance.clone(),
            };
            (Some(mount.id.as_str()), Some(issue))
        }
    }
}

// ============================================================================
// Pagination Bound
// ============================================================================

/// `/meta` URLs for the controller and every addressable mount, in document
/// order.
pub fn meta_urls(base_url: &str, mounts: &[MountEntry], limit: u32) -> Vec<String> {
    let query = format!("?limit={}", limit);
    let controller = format!(
        "{}{}{}",
        join_path(base_url, SINGLE_DOCUMENT_PATH),
        META_SUFFIX,
        query
    );
    let mounts_base = join_path(base_url, MOUNTS_PATH);

    std::iter::once(controller)
        .chain(
            mounts
                .iter()
                .filter(|mount| !mount.id.is_empty())
                .map(|mount| format!("{}/{}{}{}", mounts_base, mount.id, META_SUFFIX, query)),
        )
        .collect()
}

/// Page count of the longest document at `limit` modules per page.
///
/// `None` when any document's count is unknown: the pager then stays
/// unbounded rather than hiding pages of that document.
pub async fn page_count<S: MetaSource>(
    source: &S,
    base_url: &str,
    mounts: &[MountEntry],
    limit: u32,
) -> Option<u32> {
    let mut longest = 0;
    for url in meta_urls(base_url, mounts, limit) {
        let pages = source.fetch_meta(&url).await.ok()?.pages(limit)?;
        longest = longest.max(pages);
    }
    Some(longest)
}

// ============================================================================
// Tests
// ============================================================================
