use leptos::prelude::*;

use tavolo::cart::{CartEntry, CartState, DishId};
use tavolo::money::format_price;

#[component]
pub(super) fn CartFab(cart: RwSignal<CartState>, panel_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            id="cart-icon"
            class="cart-icon"
            title="Cart"
            on:click=move |_| panel_open.set(!panel_open.get())
        >
            "🛒"
            <span class="cart-count">{move || cart.with(|c| c.total_items()).to_string()}</span>
        </button>
    }
}

#[component]
pub(super) fn CartPanel(
    cart: RwSignal<CartState>,
    panel_open: RwSignal<bool>,
    checkout_busy: RwSignal<bool>,
    on_remove: Callback<DishId>,
    on_checkout: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        cart.with(|c| {
            c.entries()
                .map(|(id, entry)| (id, entry.clone()))
                .collect::<Vec<(DishId, CartEntry)>>()
        })
    };

    view! {
        <aside
            id="cart-panel"
            class=move || if panel_open.get() { "cart-panel show" } else { "cart-panel" }
        >
            <header class="cart-panel-header">
                <h3>"Your Cart"</h3>
                <button class="icon-btn" title="Close" on:click=move |_| panel_open.set(false)>
                    "×"
                </button>
            </header>

            <div id="cart-items" class="cart-items">
                <For
                    each=rows
                    key=|(id, entry)| (*id, entry.quantity)
                    children=move |(id, entry)| {
                        let line_total = entry.quantity as f64 * entry.price;
                        view! {
                            <div class="cart-item">
                                <h4>{entry.name.clone()}</h4>
                                <p>{format!("Quantity: {}", entry.quantity)}</p>
                                <p>{format!("Price: ${}", format_price(line_total))}</p>
                                <button
                                    class="remove-from-cart"
                                    attr:data-dish-id=id.to_string()
                                    on:click=move |_| on_remove.run(id)
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || cart.with(|c| c.is_empty())>
                <p class="cart-empty">"No items yet."</p>
            </Show>

            <div class="cart-total">
                "Total: $"
                <span id="cart-total-amount">
                    {move || cart.with(|c| format_price(c.total_price()))}
                </span>
            </div>

            <button
                id="checkout-btn"
                class="checkout-btn"
                prop:disabled=move || checkout_busy.get()
                on:click=move |_| on_checkout.run(())
            >
                {move || if checkout_busy.get() { "Placing order..." } else { "Checkout" }}
            </button>
        </aside>
    }
}
