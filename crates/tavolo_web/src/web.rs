use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use tavolo::cart::{CartState, DishId};
use tavolo::catalog::Catalog;
use tavolo::media::ArCapability;
use tavolo::order::OrderRequest;

mod cart_panel;
mod http;
mod menu;
mod model_bridge;
mod nav;
mod storage;
mod viewer;
mod xr;

use cart_panel::{CartFab, CartPanel};
use menu::MenuGrid;
use nav::SearchBar;
use viewer::DishViewer;

const CART_STORAGE_KEY: &str = "cart";

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// What the dish viewer modal is currently showing.
#[derive(Debug, Clone, PartialEq)]
struct ViewerRequest {
    dish_name: String,
    model_url: String,
}

#[component]
fn App() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::builtin_menu());
    let cart = RwSignal::new(storage::load_cart());
    let capability = RwSignal::new(ArCapability::Unknown);
    let panel_open = RwSignal::new(false);
    let checkout_busy = RwSignal::new(false);
    let viewer = RwSignal::new(None::<ViewerRequest>);
    let active_category = RwSignal::new("all".to_string());
    let search = nav::search_param().unwrap_or_default();

    // Resolved once per page load; never re-probed.
    spawn_local(async move {
        capability.set(xr::resolve_capability().await);
    });

    let on_add = Callback::new(move |dish_id: DishId| {
        // Name and price come from the catalog, never from rendered markup.
        let Some((name, price)) =
            catalog.with_value(|c| c.get(dish_id).map(|d| (d.name.clone(), d.price)))
        else {
            return;
        };
        cart.update(|c| c.add(dish_id, &name, price));
        persist_cart(cart);
    });

    let on_decrement = Callback::new(move |dish_id: DishId| {
        cart.update(|c| c.decrement(dish_id));
        persist_cart(cart);
    });

    let on_remove = Callback::new(move |dish_id: DishId| {
        cart.update(|c| c.remove(dish_id));
        persist_cart(cart);
    });

    let on_view = Callback::new(move |dish_id: DishId| {
        let request = catalog.with_value(|c| {
            c.get(dish_id).and_then(|d| {
                d.viewer_url().map(|url| ViewerRequest {
                    dish_name: d.name.clone(),
                    model_url: url.to_string(),
                })
            })
        });
        if request.is_some() {
            viewer.set(request);
        }
    });

    let on_launch_ar = Callback::new(move |dish_id: DishId| {
        let Some(url) =
            catalog.with_value(|c| c.get(dish_id).and_then(|d| d.ar_model_url.clone()))
        else {
            return;
        };
        if !capability.get_untracked().is_supported() {
            alert("AR is not supported on your device. Please try on a compatible smartphone.");
            return;
        }
        web_sys::console::log_1(&format!("Launching AR experience for: {url}").into());
        if let Err(e) = xr::launch_ar(&url) {
            web_sys::console::warn_1(&format!("AR window failed: {e}").into());
        }
    });

    let on_checkout = Callback::new(move |_: ()| {
        // One order in flight at a time; the button is also disabled while busy.
        if checkout_busy.get_untracked() {
            return;
        }
        if cart.with_untracked(|c| c.is_empty()) {
            alert("Your cart is empty!");
            return;
        }
        let Some(raw) = prompt("Please enter your table number:") else {
            alert("Order cancelled.");
            return;
        };
        let Ok(table_number) = raw.trim().parse::<u32>() else {
            alert("Order cancelled.");
            return;
        };
        let Some(order) = cart.with_untracked(|c| OrderRequest::from_cart(table_number, c)) else {
            return;
        };

        checkout_busy.set(true);
        spawn_local(async move {
            match http::place_order(&order).await {
                Ok(reply) if reply.success => {
                    match reply.order_id {
                        Some(id) => alert(&format!(
                            "Order placed successfully! Your order number is {id}."
                        )),
                        None => alert("Order placed successfully!"),
                    }
                    cart.update(|c| c.clear());
                    persist_cart(cart);
                    panel_open.set(false);
                }
                Ok(_) => alert("Failed to place order. Please try again."),
                Err(e) => {
                    web_sys::console::error_1(&format!("order submission failed: {e}").into());
                    alert("Failed to place order. Please try again.");
                }
            }
            checkout_busy.set(false);
        });
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="brand">"Tavolo"</h1>
                <SearchBar initial=search.clone() />
                <CartFab cart=cart panel_open=panel_open />
            </header>

            <MenuGrid
                catalog=catalog
                cart=cart
                search=search
                active_category=active_category
                on_add=on_add
                on_decrement=on_decrement
                on_view=on_view
                on_launch_ar=on_launch_ar
            />

            <CartPanel
                cart=cart
                panel_open=panel_open
                checkout_busy=checkout_busy
                on_remove=on_remove
                on_checkout=on_checkout
            />

            <DishViewer request=viewer capability=capability />
        </div>
    }
}

/// Mirror the cart to localStorage; runs after every mutation.
fn persist_cart(cart: RwSignal<CartState>) {
    cart.with_untracked(|c| storage::save_cart(c));
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}
