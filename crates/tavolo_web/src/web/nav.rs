use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use web_sys::console;

/// `search` query parameter of the current page, if any.
pub(super) fn search_param() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get("search")
}

/// Rewrite the `search` parameter and reload; the freshly loaded page
/// applies the filter.
fn navigate_with_search(term: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let location = window.location();
    let href = location.href().map_err(|_| "location.href threw")?;
    let url = web_sys::Url::new(&href).map_err(|_| "current URL did not parse")?;
    url.search_params().set("search", term);
    location
        .set_href(&url.href())
        .map_err(|_| "navigation threw")?;
    Ok(())
}

#[component]
pub(super) fn SearchBar(initial: String) -> impl IntoView {
    let (term, set_term) = signal(initial);

    let submit = move || {
        let q = term.get_untracked();
        if let Err(e) = navigate_with_search(q.trim()) {
            console::warn_1(&format!("search navigation failed: {e}").into());
        }
    };

    view! {
        <div class="search-bar">
            <input
                id="search-input"
                type="text"
                placeholder="Search dishes..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button id="search-btn" class="search-btn" on:click=move |_| submit()>
                "Search"
            </button>
        </div>
    }
}
