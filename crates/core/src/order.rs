//! Placed orders.
//!
//! An order is a frozen snapshot of a cart. Its lines and total are fixed at
//! construction and never change afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::types::OrderId;

/// A checked-out cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<CartLine>,
    total_amount: Decimal,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Create an order from an owned cart snapshot.
    ///
    /// The total is computed once here. Pass `cart.clone()` to keep using the
    /// source cart; later changes to it never reach the order.
    #[must_use]
    pub fn new(id: OrderId, cart: Cart) -> Self {
        let total_amount = cart.calculate_total_amount();
        Self {
            id,
            lines: cart.into_lines(),
            total_amount,
            placed_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Line items as they were at checkout.
    pub fn lines(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Number of distinct products in the order.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total computed when the order was placed.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
