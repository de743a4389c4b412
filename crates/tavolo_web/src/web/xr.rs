use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::console;

use tavolo::media::{file_name_of, ArCapability};

/// One-shot WebXR probe. web-sys still gates the typed WebXR API behind
/// unstable cfgs, so the session check goes through `Reflect`.
pub(super) async fn resolve_capability() -> ArCapability {
    match probe_immersive_ar().await {
        Ok(true) => {
            console::log_1(&"AR is supported on this device".into());
            ArCapability::Supported
        }
        Ok(false) => {
            console::log_1(&"AR is not supported on this device".into());
            ArCapability::Unsupported
        }
        Err(e) => {
            console::warn_1(&format!("AR capability probe failed: {e}").into());
            ArCapability::Unsupported
        }
    }
}

async fn probe_immersive_ar() -> Result<bool, String> {
    let window = web_sys::window().ok_or("no window")?;
    let xr = js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("xr"))
        .map_err(|_| "navigator.xr threw")?;
    if xr.is_undefined() || xr.is_null() {
        return Err("WebXR not available".to_string());
    }

    let check = js_sys::Reflect::get(&xr, &JsValue::from_str("isSessionSupported"))
        .map_err(|_| "isSessionSupported lookup threw")?;
    let check: js_sys::Function = check
        .dyn_into()
        .map_err(|_| "isSessionSupported is not callable")?;

    let promise = check
        .call1(&xr, &JsValue::from_str("immersive-ar"))
        .map_err(|_| "isSessionSupported() threw")?;
    let promise: js_sys::Promise = promise
        .dyn_into()
        .map_err(|_| "probe did not return a promise")?;

    let supported = JsFuture::from(promise)
        .await
        .map_err(|_| "probe promise rejected")?;
    Ok(supported.as_bool().unwrap_or(false))
}

/// Open the placeholder AR window. The capability gate lives with the
/// caller so the unsupported alert can fire without a window ever opening.
pub(super) fn launch_ar(model_url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let ar_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|_| "window.open() threw")?
        .ok_or("the browser blocked the AR window")?;

    let document = ar_window.document().ok_or("AR window has no document")?;
    document.set_title("AR Experience");
    let body = document.body().ok_or("AR window has no body")?;
    body.set_inner_html(&ar_window_markup(model_url));
    Ok(())
}

fn ar_window_markup(model_url: &str) -> String {
    let file = file_name_of(model_url);
    format!(
        "<style>\
         body {{ font-family: Arial, sans-serif; text-align: center; padding: 2rem; }}\
         .ar-placeholder {{ margin: 2rem auto; padding: 2rem; border: 2px dashed #ccc; }}\
         </style>\
         <h1>AR Experience</h1>\
         <div class=\"ar-placeholder\">\
         <h2>AR View Would Appear Here</h2>\
         <p>Point your camera at a flat surface to place the model.</p>\
         <p>Model: {file}</p>\
         </div>\
         <button onclick=\"window.close()\">Close AR</button>"
    )
}
