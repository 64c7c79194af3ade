//! Bridge to the Swagger UI viewer using web-sys.
//!
//! The host page loads `swagger-ui-bundle.js` (and optionally the standalone
//! preset), which install globals on `window`. This module builds the
//! configuration object and calls the bundle function through the Reflect
//! API.

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::config::{VIEWER_BUNDLE_GLOBAL, VIEWER_STANDALONE_PRESET_GLOBAL};
use crate::core::error::ViewerError;
use crate::models::DocumentDescriptor;
use crate::utils::dom;

/// Layout bundled with the standalone preset (adds the document selector).
const STANDALONE_LAYOUT: &str = "StandaloneLayout";

/// Layout available without the standalone preset.
const BASE_LAYOUT: &str = "BaseLayout";

/// Serializable part of the viewer configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig<'a> {
    urls: &'a [DocumentDescriptor],
    #[serde(rename = "dom_id")]
    dom_id: String,
    deep_linking: bool,
    layout: &'static str,
    #[serde(rename = "urls.primaryName", skip_serializing_if = "Option::is_none")]
    primary_name: Option<&'a str>,
}

impl<'a> ViewerConfig<'a> {
    /// Configuration showing `documents` inside the element with id `dom_id`.
    ///
    /// The first document is preselected.
    pub fn new(documents: &'a [DocumentDescriptor], dom_id: &str, standalone: bool) -> Self {
        Self {
            urls: documents,
            dom_id: format!("#{}", dom_id),
            deep_linking: true,
            layout: if standalone {
                STANDALONE_LAYOUT
            } else {
                BASE_LAYOUT
            },
            primary_name: documents.first().map(|d| d.name.as_str()),
        }
    }
}

/// Look up a global object on `window`.
fn global(name: &str) -> Option<JsValue> {
    let window = dom::window()?;
    Reflect::get(&window, &name.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Presets list: `[SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset?]`.
fn presets(bundle: &Function, standalone: Option<&JsValue>) -> Result<Array, ViewerError> {
    let presets = Array::new();

    let apis = Reflect::get(bundle, &"presets".into())
        .and_then(|p| Reflect::get(&p, &"apis".into()))
        .map_err(|_| ViewerError::ConfigFailed("missing presets.apis".to_string()))?;
    presets.push(&apis);

    if let Some(preset) = standalone {
        presets.push(preset);
    }

    Ok(presets)
}

/// Render `documents` into the element with id `dom_id`.
///
/// Replaces whatever the viewer previously rendered there.
pub fn mount_viewer(documents: &[DocumentDescriptor], dom_id: &str) -> Result<(), ViewerError> {
    dom::window().ok_or(ViewerError::NoWindow)?;
    if !dom::has_element(dom_id) {
        return Err(ViewerError::MissingContainer(dom_id.to_string()));
    }

    let bundle = global(VIEWER_BUNDLE_GLOBAL)
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(ViewerError::NotLoaded(VIEWER_BUNDLE_GLOBAL))?;
    let standalone = global(VIEWER_STANDALONE_PRESET_GLOBAL);

    let config = ViewerConfig::new(documents, dom_id, standalone.is_some());
    let config: Object = serde_wasm_bindgen::to_value(&config)
        .map_err(|e| ViewerError::ConfigFailed(e.to_string()))?
        .dyn_into()
        .map_err(|_| ViewerError::ConfigFailed("configuration is not an object".to_string()))?;

    let presets = presets(&bundle, standalone.as_ref())?;
    Reflect::set(&config, &"presets".into(), &presets)
        .map_err(|_| ViewerError::ConfigFailed("cannot set presets".to_string()))?;

    bundle
        .call1(&JsValue::NULL, &config)
        .map_err(|e| ViewerError::InitFailed(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_shape() {
        let documents = vec![
            DocumentDescriptor::new(
                "http://odl:8181/openapi/api/v3/single?depth=3&width=5",
                "Controller resources - RestConf RFC 8040",
            ),
            DocumentDescriptor::new(
                "http://odl:8181/openapi/api/v3/mounts/1?depth=3&width=5",
                "r1 resources - RestConf RFC 8040",
            ),
        ];
        let config = ViewerConfig::new(&documents, "swagger-ui", true);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["dom_id"], "#swagger-ui");
        assert_eq!(json["deepLinking"], true);
        assert_eq!(json["layout"], "StandaloneLayout");
        assert_eq!(
            json["urls.primaryName"],
            "Controller resources - RestConf RFC 8040"
        );
        assert_eq!(json["urls"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            json["urls"][1]["url"],
            "http://odl:8181/openapi/api/v3/mounts/1?depth=3&width=5"
        );
        assert_eq!(json["urls"][1]["name"], "r1 resources - RestConf RFC 8040");
    }

    #[test]
    fn test_config_without_standalone_preset() {
        let documents: Vec<DocumentDescriptor> = Vec::new();
        let config = ViewerConfig::new(&documents, "docs", false);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["layout"], "BaseLayout");
        assert!(json.get("urls.primaryName").is_none());
    }
}
