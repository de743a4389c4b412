use wasm_bindgen::prelude::*;
use web_sys::console;

#[wasm_bindgen]
extern "C" {
    /// Installed by the host page; owns the actual 3D scene inside the given
    /// container element.
    #[wasm_bindgen(js_name = tavoloRenderModel, catch)]
    fn tavolo_render_model(model_url: &str, container_id: &str) -> Result<(), JsValue>;
}

/// Hand a model off to the page's renderer, if one is installed.
pub(super) fn render_model(model_url: &str, container_id: &str) {
    console::log_1(&format!("Loading 3D model: {model_url}").into());
    if tavolo_render_model(model_url, container_id).is_err() {
        console::warn_1(&"no model renderer installed on this page".into());
    }
}
