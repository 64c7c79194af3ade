//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;

use crate::components::ApiDocs;
use crate::core::{LocalStorageStore, load_settings, save_depth, save_width};
use crate::models::ViewSettings;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or plain
/// copyable values.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Depth/width for every document, mirrored to localStorage.
    pub settings: RwSignal<ViewSettings>,

    /// Bumped to re-run mount discovery.
    pub reload: RwSignal<u32>,

    /// Persistent settings backend.
    store: LocalStorageStore,
}

impl AppContext {
    /// Creates a new context with settings read from localStorage.
    pub fn new() -> Self {
        let store = LocalStorageStore;
        Self {
            settings: RwSignal::new(load_settings(&store)),
            reload: RwSignal::new(0),
            store,
        }
    }

    /// Update and persist the depth setting.
    pub fn set_depth(&self, depth: u32) {
        self.settings.update(|s| s.depth = depth);
        if let Err(e) = save_depth(&self.store, depth) {
            web_sys::console::warn_1(&format!("depth not saved: {}", e).into());
        }
    }

    /// Update and persist the width setting.
    pub fn set_width(&self, width: u32) {
        self.settings.update(|s| s.width = width);
        if let Err(e) = save_width(&self.store, width) {
            web_sys::console::warn_1(&format!("width not saved: {}", e).into());
        }
    }

    /// Re-run mount discovery.
    pub fn reload(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    /// Base URL every document path is resolved against.
    pub fn base_url(&self) -> String {
        dom::origin().unwrap_or_default()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    max-width: 600px;
                    margin: 4rem auto;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #c0392b;">"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ApiDocs />
        </ErrorBoundary>
    }
}
