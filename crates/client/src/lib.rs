//! Marketplace REST client layer.
//!
//! Builds on the `mercado` core: a cart store that mirrors quantity changes
//! to the backend before mutating local state, checkout into orders, and the
//! product / order / seller-profile API surface.

pub mod config;
pub mod domain;
pub mod rest;
