//! Inkwell Core - Shop domain library.
//!
//! This crate provides the domain model used by the Inkwell console shop:
//! - [`catalog`] - Fixed product catalog
//! - [`cart`] - Live shopping cart with add-or-merge semantics
//! - [`order`] - Immutable snapshots of checked-out carts
//! - [`customer`] - Customer aggregate owning one cart and its order history
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no terminal
//! handling, no environment access. The `cli` crate drives it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, product codes, prices and outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod order;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use customer::{CheckoutError, Customer};
pub use order::Order;
pub use types::*;
