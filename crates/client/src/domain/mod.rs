//! Domain services over the marketplace API.

pub mod carts;
pub mod orders;
pub mod products;
pub mod sellers;
