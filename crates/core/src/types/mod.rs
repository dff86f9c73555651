//! Core types for Inkwell.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod outcome;
pub mod price;
pub mod product_code;

pub use id::*;
pub use outcome::{AddOutcome, CartState};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use product_code::{ProductCode, ProductCodeError};
