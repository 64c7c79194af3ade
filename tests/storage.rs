//! Browser-only checks for the localStorage settings backend.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use odl_apidoc::core::settings::{LocalStorageStore, SettingsStore, load_settings, save_depth};
use odl_apidoc::models::ViewSettings;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available in test browser");
    storage.clear().expect("clear localStorage");
}

#[wasm_bindgen_test]
fn defaults_when_storage_is_empty() {
    clear();
    assert_eq!(load_settings(&LocalStorageStore), ViewSettings::default());
}

#[wasm_bindgen_test]
fn saved_depth_survives_reload() {
    clear();
    save_depth(&LocalStorageStore, 7).unwrap();

    assert_eq!(LocalStorageStore.get("depth").as_deref(), Some("7"));
    assert_eq!(load_settings(&LocalStorageStore).depth, 7);
}

#[wasm_bindgen_test]
fn non_numeric_value_is_ignored() {
    clear();
    LocalStorageStore.set("width", "wide").unwrap();

    assert_eq!(load_settings(&LocalStorageStore).width, 5);
}
