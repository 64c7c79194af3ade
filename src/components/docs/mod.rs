//! Document explorer view.
//!
//! Runs mount discovery, derives the document list from the discovery result
//! and the current settings/page, and hands it to the viewer. Changing a
//! setting rebuilds the list without asking the controller again; only the
//! reload button re-runs discovery.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::ControlBar;
use crate::components::icons as ic;
use crate::config::VIEWER_DOM_ID;
use crate::core::viewer;
use crate::core::{
    DiscoveryStatus, HttpMetaSource, HttpMountSource, Resolution, build_documents, discover,
    mount_issues, page_count,
};
use crate::models::{Page, QueryParams};

stylance::import_crate_style!(css, "src/components/docs/docs.module.css");

/// Human-readable discovery summary.
fn status_text(resolution: &Resolution) -> String {
    match &resolution.discovery {
        DiscoveryStatus::Available { devices: 1 } => "1 mounted device".to_string(),
        DiscoveryStatus::Available { devices } => format!("{} mounted devices", devices),
        DiscoveryStatus::Unavailable(_) => {
            "Mounted devices unavailable, showing controller only".to_string()
        }
    }
}

/// Control bar, discovery status and the viewer host element.
#[component]
pub fn ApiDocs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let base_url = ctx.base_url();

    // Pagination belongs to this view only
    let page = RwSignal::new(None::<Page>);
    let viewer_error = RwSignal::new(None::<String>);

    let discovered = LocalResource::new({
        let base_url = base_url.clone();
        move || {
            ctx.reload.track();
            let base_url = base_url.clone();
            async move { discover(&HttpMountSource, &base_url).await }
        }
    });

    // Page count only depends on the limit, not on the current offset
    let page_limit = Memo::new(move |_| page.get().map(|p| p.limit));
    let total_pages = LocalResource::new({
        let base_url = base_url.clone();
        move || {
            let limit = page_limit.get();
            let mounts = discovered.get().map(Result::unwrap_or_default);
            let base_url = base_url.clone();
            async move {
                match (limit, mounts) {
                    (Some(limit), Some(mounts)) => {
                        page_count(&HttpMetaSource, &base_url, &mounts, limit).await
                    }
                    _ => None,
                }
            }
        }
    });
    let at_end = Signal::derive(move || match (page.get(), total_pages.get().flatten()) {
        (Some(current), Some(total)) => current.is_last(total),
        _ => false,
    });

    let resolution = Memo::new(move |_| {
        let params = QueryParams::new(&ctx.settings.get(), page.get());
        discovered
            .get()
            .map(|result| build_documents(&base_url, &params, &result))
    });

    // Log once per discovery, not on every settings change
    Effect::new(move || match discovered.get() {
        Some(Ok(mounts)) => {
            for issue in mount_issues(&mounts) {
                web_sys::console::warn_1(&issue.to_string().into());
            }
        }
        Some(Err(err)) => web_sys::console::error_1(&err.to_string().into()),
        None => {}
    });

    // Re-render the viewer whenever the document list changes
    Effect::new(move || {
        let Some(resolution) = resolution.get() else {
            return;
        };
        match viewer::mount_viewer(&resolution.documents, VIEWER_DOM_ID) {
            Ok(()) => viewer_error.set(None),
            Err(err) => {
                web_sys::console::error_1(&err.to_string().into());
                viewer_error.set(Some(err.to_string()));
            }
        }
    });

    view! {
        <div class=css::layout>
            <ControlBar page=page at_end=at_end />

            <div class=css::status>
                {move || match resolution.get() {
                    None => view! {
                        <span class=css::pending>"Discovering mounted devices..."</span>
                    }.into_any(),
                    Some(resolution) => {
                        let text = status_text(&resolution);
                        let detail = match &resolution.discovery {
                            DiscoveryStatus::Unavailable(err) => Some(err.to_string()),
                            DiscoveryStatus::Available { .. } => None,
                        };
                        view! {
                            <span class=css::summary>{text}</span>
                            {detail.map(|detail| view! {
                                <span class=css::warning>
                                    <Icon icon=ic::WARNING />
                                    {detail}
                                </span>
                            })}
                        }.into_any()
                    }
                }}
                {move || viewer_error.get().map(|err| view! {
                    <span class=css::warning>
                        <Icon icon=ic::WARNING />
                        {err}
                    </span>
                })}
            </div>

            <div id=VIEWER_DOM_ID class=css::viewer></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{DiscoveryError, FetchError};

    fn resolution(discovery: DiscoveryStatus) -> Resolution {
        Resolution {
            documents: Vec::new(),
            discovery,
            issues: Vec::new(),
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(&resolution(DiscoveryStatus::Available { devices: 1 })),
            "1 mounted device"
        );
        assert_eq!(
            status_text(&resolution(DiscoveryStatus::Available { devices: 0 })),
            "0 mounted devices"
        );
        assert_eq!(
            status_text(&resolution(DiscoveryStatus::Unavailable(DiscoveryError {
                url: "/openapi/api/v3/mounts".to_string(),
                source: FetchError::Timeout,
            }))),
            "Mounted devices unavailable, showing controller only"
        );
    }
}
