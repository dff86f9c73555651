//! Outcome and state enums for cart operations.

use serde::{Deserialize, Serialize};

/// Result of adding a product to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was appended for a product not yet in the cart.
    Added,
    /// The product was already in the cart and its quantity was increased.
    Updated,
}

/// Whether a cart currently holds anything.
///
/// Adding a product moves `Empty` to `NonEmpty`. Checkout is the only
/// transition back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    #[default]
    Empty,
    NonEmpty,
}
