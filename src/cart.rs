// src/cart.rs

//! The per-visitor shopping cart.
//!
//! The cart is a plain value (an ordered map of product id to quantity) that
//! the session layer serialises into the visitor's cookie between requests.
//! It never talks to the database itself; resolving entries against the
//! catalog is the pricing service's job.
//!
//! Invariant: no entry is ever stored with a quantity <= 0. Mutations that
//! would leave one behind remove the entry instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
  items: BTreeMap<i64, i64>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Increments the quantity for `product_id`, creating the entry if absent.
  /// An increment that brings the quantity to zero or below removes the
  /// entry. Callers that want to reject non-positive quantities outright do
  /// so before calling in.
  pub fn add(&mut self, product_id: i64, quantity: i64) {
    let next = self.items.get(&product_id).copied().unwrap_or(0) + quantity;
    if next <= 0 {
      self.items.remove(&product_id);
    } else {
      self.items.insert(product_id, next);
    }
  }

  /// Sets the quantity for `product_id` exactly (not additive). A quantity
  /// of zero or below removes the entry.
  pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
    if quantity <= 0 {
      self.items.remove(&product_id);
    } else {
      self.items.insert(product_id, quantity);
    }
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn quantity_of(&self, product_id: i64) -> i64 {
    self.items.get(&product_id).copied().unwrap_or(0)
  }

  /// Sum of all requested quantities, for the "N items" badge.
  pub fn total_quantity(&self) -> i64 {
    self.items.values().sum()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Entries in ascending product-id order.
  pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
    self.items.iter().map(|(&product_id, &quantity)| (product_id, quantity))
  }
}
