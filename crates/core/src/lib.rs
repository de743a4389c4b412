//! # tavolo
//!
//! Browser-free domain logic for the table-ordering front-end: the cart a
//! guest builds up while browsing the menu, the dish catalog the cards render
//! from, the order payload the backend accepts, and the small pieces of
//! classification the dish viewer needs (AR capability, model-vs-image URLs).
//!
//! Everything here runs identically on native and `wasm32`, so it carries the
//! whole test surface; the web crate is thin glue over these types.
//!
//! ```
//! use tavolo::cart::CartState;
//! use tavolo::money::format_price;
//!
//! let mut cart = CartState::new();
//! cart.add(3, "Pasta", 12.50);
//! cart.add(3, "Pasta", 12.50);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(format_price(cart.total_price()), "25.00");
//! ```

pub mod cart;
pub mod catalog;
pub mod media;
pub mod money;
pub mod order;
