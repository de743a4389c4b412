use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use tavolo::media::{file_name_of, ArCapability, MediaKind};

use super::{model_bridge, ViewerRequest};

const MODEL_CONTAINER_ID: &str = "model-container";

#[component]
pub(super) fn DishViewer(
    request: RwSignal<Option<ViewerRequest>>,
    capability: RwSignal<ArCapability>,
) -> impl IntoView {
    let declined = RwSignal::new(false);

    // A freshly opened dish starts back on the AR path.
    Effect::new(move |_| {
        request.track();
        declined.set(false);
    });

    view! {
        <Show when=move || request.get().is_some() fallback=|| ()>
            {move || {
                let req = request
                    .get()
                    .expect("Show guarantees request is Some when rendered");
                let url = req.model_url.clone();
                let fallback_url = req.model_url.clone();

                view! {
                    <div class="viewer-overlay" on:click=move |_| request.set(None)></div>
                    <div class="viewer-modal" role="dialog">
                        <header class="viewer-header">
                            <h3>{req.dish_name.clone()}</h3>
                            <span class="subtle">{move || capability.get().label()}</span>
                            <button
                                class="viewer-close"
                                title="Close"
                                on:click=move |_| request.set(None)
                            >
                                "×"
                            </button>
                        </header>
                        <Show
                            when=move || capability.get().is_supported() && !declined.get()
                            fallback=move || {
                                view! { <FallbackPane model_url=fallback_url.clone() /> }
                            }
                        >
                            <ArPane model_url=url.clone() declined=declined />
                        </Show>
                    </div>
                }
            }}
        </Show>
    }
}

/// AR-session placeholder shown while the device claims support; the real
/// session launches from the card's AR button, not from here.
#[component]
fn ArPane(model_url: String, declined: RwSignal<bool>) -> impl IntoView {
    let file = file_name_of(&model_url).to_string();

    view! {
        <div class="ar-placeholder">
            <h3>"AR View"</h3>
            <p>"AR functionality would be displayed here"</p>
            <p>{format!("Model: {file}")}</p>
            <button class="ar-fallback-btn" on:click=move |_| declined.set(true)>
                "View 3D Model"
            </button>
        </div>
    }
}

/// Non-AR path: 3D assets go to the external renderer, everything else is
/// shown as a plain image.
#[component]
fn FallbackPane(model_url: String) -> impl IntoView {
    let is_model = matches!(MediaKind::from_url(&model_url), MediaKind::Model);
    let image_url = model_url.clone();

    if is_model {
        // Leptos 0.7 doesn't expose `on_mount`; schedule a microtask so the
        // DOM has a chance to insert the container before the renderer
        // looks it up.
        let url = model_url.clone();
        Effect::new(move |_| {
            let url = url.clone();
            spawn_local(async move {
                let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
                model_bridge::render_model(&url, MODEL_CONTAINER_ID);
            });
        });
    }

    view! {
        <Show
            when=move || is_model
            fallback=move || {
                view! {
                    <div class="image-fallback">
                        <h3>"Model Preview"</h3>
                        <p>"AR is not supported on your device."</p>
                        <img src=image_url.clone() alt="3D Model Preview" style="max-width: 100%;" />
                    </div>
                }
            }
        >
            <div class="fallback-viewer">
                <h3>"3D Model View"</h3>
                <p>"AR is not supported on your device. Showing 3D model instead."</p>
                <div class="model-container" id=MODEL_CONTAINER_ID></div>
            </div>
        </Show>
    }
}
