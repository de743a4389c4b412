use leptos::prelude::*;

use tavolo::cart::{CartState, DishId};
use tavolo::catalog::{Catalog, Dish};
use tavolo::money::format_price;

#[component]
pub(super) fn MenuGrid(
    catalog: StoredValue<Catalog>,
    cart: RwSignal<CartState>,
    search: String,
    active_category: RwSignal<String>,
    on_add: Callback<DishId>,
    on_decrement: Callback<DishId>,
    on_view: Callback<DishId>,
    on_launch_ar: Callback<DishId>,
) -> impl IntoView {
    let categories = catalog.with_value(|c| {
        let mut tabs = vec!["all".to_string()];
        tabs.extend(c.categories().into_iter().map(String::from));
        tabs
    });

    let shown = Memo::new(move |_| {
        let category = active_category.get();
        catalog.with_value(|c| {
            c.filtered(&search, &category)
                .into_iter()
                .cloned()
                .collect::<Vec<Dish>>()
        })
    });

    view! {
        <section class="menu">
            <nav class="category-tabs">
                {categories
                    .into_iter()
                    .map(|category| {
                        let class_key = category.clone();
                        let click_key = category.clone();
                        let label = category.clone();
                        view! {
                            <button
                                class=move || {
                                    if active_category.get() == class_key {
                                        "category-tab active"
                                    } else {
                                        "category-tab"
                                    }
                                }
                                on:click=move |_| active_category.set(click_key.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || shown.with(|d| d.is_empty())>
                <p class="menu-empty">"No dishes match your search."</p>
            </Show>

            <div class="menu-grid">
                <For
                    each=move || shown.get()
                    key=|dish| dish.id
                    children=move |dish| {
                        view! {
                            <DishCard
                                dish=dish
                                cart=cart
                                on_add=on_add
                                on_decrement=on_decrement
                                on_view=on_view
                                on_launch_ar=on_launch_ar
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn DishCard(
    dish: Dish,
    cart: RwSignal<CartState>,
    on_add: Callback<DishId>,
    on_decrement: Callback<DishId>,
    on_view: Callback<DishId>,
    on_launch_ar: Callback<DishId>,
) -> impl IntoView {
    let dish_id = dish.id;
    let quantity = Memo::new(move |_| cart.with(|c| c.quantity(dish_id)));
    let price_label = format!("${}", format_price(dish.price));
    let viewable = dish.viewer_url().is_some();
    let model_url = dish.ar_model_url.clone().filter(|u| !u.trim().is_empty());

    view! {
        <article class="dish-card">
            {dish
                .image_url
                .clone()
                .map(|src| view! { <img class="dish-photo" src=src alt=dish.name.clone() /> })}
            <h3>{dish.name.clone()}</h3>
            <p class="description">{dish.description.clone()}</p>
            <p class="price">{price_label}</p>

            <div class="quantity-controls">
                <button
                    class="quantity-btn minus"
                    attr:data-dish-id=dish_id.to_string()
                    on:click=move |_| on_decrement.run(dish_id)
                >
                    "-"
                </button>
                <span class="quantity" id=format!("quantity-{dish_id}")>
                    {move || quantity.get().to_string()}
                </span>
                <button
                    class="quantity-btn plus"
                    attr:data-dish-id=dish_id.to_string()
                    on:click=move |_| on_add.run(dish_id)
                >
                    "+"
                </button>
            </div>

            <div class="dish-actions">
                {viewable
                    .then(|| {
                        view! {
                            <button class="preview-btn" on:click=move |_| on_view.run(dish_id)>
                                "Preview"
                            </button>
                        }
                    })}
                {model_url
                    .map(|url| {
                        view! {
                            <button
                                class="view-ar-btn"
                                attr:data-model-url=url
                                on:click=move |_| on_launch_ar.run(dish_id)
                            >
                                "View in AR"
                            </button>
                        }
                    })}
            </div>
        </article>
    }
}
