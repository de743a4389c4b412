use serde::{Deserialize, Serialize};

use crate::cart::{CartState, DishId};

/// One line of an order as the kitchen endpoint wants it: just the dish id
/// and how many, no pricing (the server re-prices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: DishId,
    pub quantity: u32,
}

/// Body for `POST /api/order/place`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub table_number: u32,
    pub items: Vec<OrderItem>,
}

impl OrderRequest {
    /// Snapshot the cart into an order for `table_number`, items in
    /// ascending dish id order. An empty cart has no order; callers treat
    /// `None` as "nothing to send".
    pub fn from_cart(table_number: u32, cart: &CartState) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        let items = cart
            .entries()
            .map(|(dish_id, entry)| OrderItem {
                dish_id,
                quantity: entry.quantity,
            })
            .collect();
        Some(Self {
            table_number,
            items,
        })
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("order encode: {e}"))
    }
}

/// What the endpoint answers. `order_id` is only present on success, and
/// even then older servers may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReply {
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<u64>,
}

impl OrderReply {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("order reply: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_every_line_in_id_order() {
        let mut cart = CartState::new();
        cart.add(9, "Steak Dinner", 24.99);
        cart.add(3, "French Fries", 4.99);
        cart.add(9, "Steak Dinner", 24.99);

        let order = OrderRequest::from_cart(12, &cart).expect("cart has items");
        assert_eq!(order.table_number, 12);
        assert_eq!(
            order.items,
            vec![
                OrderItem { dish_id: 3, quantity: 1 },
                OrderItem { dish_id: 9, quantity: 2 },
            ]
        );
    }

    #[test]
    fn empty_cart_yields_no_order() {
        assert!(OrderRequest::from_cart(4, &CartState::new()).is_none());
    }

    #[test]
    fn wire_body_matches_the_endpoint_contract() {
        let mut cart = CartState::new();
        cart.add(3, "Pasta", 12.50);
        cart.add(3, "Pasta", 12.50);

        let order = OrderRequest::from_cart(5, &cart).expect("cart has items");
        assert_eq!(
            order.to_json().expect("encodes"),
            r#"{"table_number":5,"items":[{"dish_id":3,"quantity":2}]}"#
        );
    }

    #[test]
    fn reply_parsing_covers_success_failure_and_garbage() {
        let ok = OrderReply::from_json(r#"{"success": true, "order_id": 42}"#).expect("ok");
        assert!(ok.success);
        assert_eq!(ok.order_id, Some(42));

        let rejected = OrderReply::from_json(r#"{"success": false}"#).expect("ok");
        assert!(!rejected.success);
        assert_eq!(rejected.order_id, None);

        assert!(OrderReply::from_json("half a reply {").is_err());
    }
}
