//! Browser-only checks for the viewer hand-off.
//!
//! A stand-in `SwaggerUIBundle` records the configuration it receives on
//! `window.lastViewerConfig`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Reflect};
use odl_apidoc::core::error::ViewerError;
use odl_apidoc::core::viewer::mount_viewer;
use odl_apidoc::models::DocumentDescriptor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("window available in test browser")
}

fn add_container(id: &str) {
    let document = window().document().expect("document");
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let element = document.create_element("div").expect("create div");
    element.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append container");
}

fn install_bundle() {
    let bundle = Function::new_with_args("config", "window.lastViewerConfig = config;");
    let presets = Object::new();
    Reflect::set(&presets, &"apis".into(), &"apis-preset".into()).unwrap();
    Reflect::set(&bundle, &"presets".into(), &presets).unwrap();
    Reflect::set(&window(), &"SwaggerUIBundle".into(), &bundle).unwrap();
    Reflect::delete_property(&window(), &"SwaggerUIStandalonePreset".into()).unwrap();
}

fn documents() -> Vec<DocumentDescriptor> {
    vec![
        DocumentDescriptor::new(
            "/openapi/api/v3/single?depth=3&width=5",
            "Controller resources - RestConf RFC 8040",
        ),
        DocumentDescriptor::new(
            "/openapi/api/v3/mounts/1?depth=3&width=5",
            "r1 resources - RestConf RFC 8040",
        ),
    ]
}

fn field(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    install_bundle();

    assert_eq!(
        mount_viewer(&documents(), "no-such-container"),
        Err(ViewerError::MissingContainer("no-such-container".to_string()))
    );
}

#[wasm_bindgen_test]
fn missing_bundle_is_reported() {
    add_container("viewer-without-bundle");
    Reflect::delete_property(&window(), &"SwaggerUIBundle".into()).unwrap();

    assert_eq!(
        mount_viewer(&documents(), "viewer-without-bundle"),
        Err(ViewerError::NotLoaded("SwaggerUIBundle"))
    );
}

#[wasm_bindgen_test]
fn bundle_receives_documents_and_presets() {
    add_container("viewer-host");
    install_bundle();

    assert_eq!(mount_viewer(&documents(), "viewer-host"), Ok(()));

    let config = field(&window(), "lastViewerConfig");
    assert_eq!(field(&config, "dom_id").as_string().as_deref(), Some("#viewer-host"));
    assert_eq!(field(&config, "layout").as_string().as_deref(), Some("BaseLayout"));

    let urls = Array::from(&field(&config, "urls"));
    assert_eq!(urls.length(), 2);
    assert_eq!(
        field(&urls.get(1), "name").as_string().as_deref(),
        Some("r1 resources - RestConf RFC 8040")
    );

    let presets = Array::from(&field(&config, "presets"));
    assert_eq!(presets.length(), 1);
    assert_eq!(presets.get(0).as_string().as_deref(), Some("apis-preset"));
}
