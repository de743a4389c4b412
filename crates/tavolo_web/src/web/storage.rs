use tavolo::cart::CartState;
use web_sys::console;

use super::CART_STORAGE_KEY;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

/// Cart as persisted by this and earlier versions of the site. Anything
/// unreadable is dropped and the guest starts with an empty cart.
pub(super) fn load_cart() -> CartState {
    let Some(raw) = local_storage_get_string(CART_STORAGE_KEY) else {
        return CartState::new();
    };
    match serde_json::from_str(&raw) {
        Ok(cart) => cart,
        Err(e) => {
            console::warn_1(&format!("stored cart ignored: {e}").into());
            CartState::new()
        }
    }
}

pub(super) fn save_cart(cart: &CartState) {
    if let Ok(raw) = serde_json::to_string(cart) {
        local_storage_set_string(CART_STORAGE_KEY, &raw);
    }
}
