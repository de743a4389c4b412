use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Integer dish identifier, shared with the catalog and the order API.
pub type DishId = u32;

/// One chosen dish: display name, unit price, and how many of it.
///
/// Field names match the JSON the site has always written to
/// `localStorage["cart"]`, so carts saved by earlier builds load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// The guest's cart: dishes keyed by id, not yet submitted as an order.
///
/// Serializes transparently as the id→entry mapping (`{"3": {...}}`).
/// A `BTreeMap` keeps render order at ascending dish id, which is the order
/// the panel has always listed items in. An entry never sits at quantity
/// zero; it is removed instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    entries: BTreeMap<DishId, CartEntry>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a dish, creating the entry on first add.
    ///
    /// Name and price come from the catalog entry the caller clicked, never
    /// from anything rendered; the cart is the source of truth from here on.
    pub fn add(&mut self, dish_id: DishId, name: &str, price: f64) {
        match self.entries.get_mut(&dish_id) {
            Some(entry) => entry.quantity += 1,
            None => {
                self.entries.insert(
                    dish_id,
                    CartEntry {
                        name: name.to_string(),
                        price,
                        quantity: 1,
                    },
                );
            }
        }
    }

    /// Delete the entry outright, whatever its quantity.
    pub fn remove(&mut self, dish_id: DishId) {
        self.entries.remove(&dish_id);
    }

    /// Take one unit off; the entry disappears when it reaches zero.
    /// Decrementing a dish that is not in the cart does nothing.
    pub fn decrement(&mut self, dish_id: DishId) {
        let Some(entry) = self.entries.get_mut(&dish_id) else {
            return;
        };
        entry.quantity = entry.quantity.saturating_sub(1);
        if entry.quantity == 0 {
            self.entries.remove(&dish_id);
        }
    }

    pub fn quantity(&self, dish_id: DishId) -> u32 {
        self.entries.get(&dish_id).map_or(0, |e| e.quantity)
    }

    pub fn get(&self, dish_id: DishId) -> Option<&CartEntry> {
        self.entries.get(&dish_id)
    }

    /// Total unit count across all entries. Recomputed on every call.
    pub fn total_items(&self) -> u32 {
        self.entries.values().map(|e| e.quantity).sum()
    }

    /// Σ quantity × unit price. Recomputed on every call, never tracked.
    pub fn total_price(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.quantity as f64 * e.price)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in ascending dish-id order, which is the order the panel renders.
    pub fn entries(&self) -> impl Iterator<Item = (DishId, &CartEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_price;

    #[test]
    fn adding_the_same_dish_twice_accumulates() {
        let mut cart = CartState::new();
        cart.add(3, "Pasta", 12.50);
        cart.add(3, "Pasta", 12.50);

        let entry = cart.get(3).expect("entry exists after add");
        assert_eq!(entry.name, "Pasta");
        assert_eq!(entry.quantity, 2);
        assert_eq!(cart.len(), 1);

        assert_eq!(cart.total_items(), 2);
        assert_eq!(format_price(cart.total_price()), "25.00");
    }

    #[test]
    fn totals_track_entry_sums_across_mixed_ops() {
        let mut cart = CartState::new();
        cart.add(1, "Classic Burger", 12.99);
        cart.add(1, "Classic Burger", 12.99);
        cart.add(8, "Coffee", 2.99);
        cart.add(11, "Garlic Bread", 5.99);
        cart.decrement(1);
        cart.decrement(8);

        let item_sum: u32 = cart.entries().map(|(_, e)| e.quantity).sum();
        let price_sum: f64 = cart
            .entries()
            .map(|(_, e)| e.quantity as f64 * e.price)
            .sum();

        assert_eq!(cart.total_items(), item_sum);
        assert_eq!(cart.total_items(), 2);
        assert!((cart.total_price() - price_sum).abs() < 1e-9);
        assert_eq!(format_price(cart.total_price()), "18.98");
    }

    #[test]
    fn decrement_to_zero_removes_the_entry() {
        let mut cart = CartState::new();
        cart.add(4, "Chocolate Milkshake", 6.99);
        assert_eq!(cart.quantity(4), 1);

        cart.decrement(4);
        assert_eq!(cart.quantity(4), 0);
        assert!(cart.get(4).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_of_absent_dish_is_a_noop() {
        let mut cart = CartState::new();
        cart.add(2, "Caesar Salad", 9.99);

        cart.decrement(99);
        cart.decrement(99);

        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.quantity(2), 1);
    }

    #[test]
    fn remove_deletes_regardless_of_quantity() {
        let mut cart = CartState::new();
        for _ in 0..5 {
            cart.add(9, "Steak Dinner", 24.99);
        }
        assert_eq!(cart.quantity(9), 5);

        cart.remove(9);
        assert!(cart.is_empty());
    }

    #[test]
    fn entries_iterate_in_ascending_id_order() {
        let mut cart = CartState::new();
        cart.add(12, "Chocolate Cake", 7.99);
        cart.add(3, "French Fries", 4.99);
        cart.add(7, "Bacon and Eggs", 10.99);

        let ids: Vec<DishId> = cart.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![3, 7, 12]);
    }

    #[test]
    fn persisted_shape_matches_the_stored_mapping() {
        let mut cart = CartState::new();
        cart.add(3, "Pasta", 12.50);
        cart.add(3, "Pasta", 12.50);

        let raw = serde_json::to_string(&cart).expect("serializes");
        assert_eq!(raw, r#"{"3":{"name":"Pasta","price":12.5,"quantity":2}}"#);

        let back: CartState = serde_json::from_str(&raw).expect("parses");
        assert_eq!(back, cart);
    }

    #[test]
    fn loads_carts_written_by_the_previous_site() {
        let raw = r#"{"1":{"name":"Classic Burger","price":12.99,"quantity":1},
                      "9":{"name":"Steak Dinner","price":24.99,"quantity":2}}"#;
        let cart: CartState = serde_json::from_str(raw).expect("parses");

        assert_eq!(cart.total_items(), 3);
        assert_eq!(format_price(cart.total_price()), "62.97");
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = CartState::new();
        cart.add(5, "Pancake Breakfast", 8.99);
        cart.add(6, "Fresh Orange Juice", 3.99);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }
}
