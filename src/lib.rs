//! Browser explorer for the RESTCONF OpenAPI documents of a network
//! controller and its mounted devices.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the application into the `#app` element.
pub fn start() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, app::App).forget();
}
