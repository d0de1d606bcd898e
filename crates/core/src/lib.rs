//! Mercado
//!
//! Mercado is the client-side core of a mobile marketplace: the cart
//! aggregate, its mutation engine, and the product and order models the
//! screens render. It performs no I/O; remote synchronization lives in
//! `mercado-client`.

pub mod cart;
pub mod ids;
pub mod items;
pub mod orders;
pub mod pricing;
pub mod products;

pub use cart::{Cart, CartError};
pub use items::LineItem;
pub use products::Product;
