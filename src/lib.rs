// src/lib.rs

//! Shopfront: a minimal server-rendered-storefront backend.
//!
//! The crate is a thin orchestration layer over SQLite (via `sqlx`) exposed
//! through an `actix-web` HTTP transport:
//!  - A catalog of products, extended through a password-gated admin surface.
//!  - A per-visitor shopping cart kept in a cookie-backed session.
//!  - Checkout, which turns a cart into an order plus line items in one
//!    transaction, snapshotting unit prices at purchase time.

pub mod cart;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
