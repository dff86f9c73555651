//! Shopping cart.
//!
//! A cart holds at most one line per product code. Adding a product that is
//! already present increases that line's quantity instead of adding a second
//! line. Lines keep the order in which each product was first added.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{AddOutcome, CartState, ProductCode};

/// A product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }
}

/// A customer's live shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` of `product`, merging with an existing line if present.
    ///
    /// Quantity is not validated here; callers bound it before adding.
    /// Merged quantities saturate at `u32::MAX`.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.code() == product.code())
        {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(
                code = %product.code(),
                added = quantity,
                quantity = line.quantity,
                "Cart line updated"
            );
            return AddOutcome::Updated;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        tracing::debug!(code = %product.code(), quantity, "Cart line added");
        AddOutcome::Added
    }

    /// Sum of price times quantity over every line. Zero when empty.
    #[must_use]
    pub fn calculate_total_amount(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines in first-add order.
    pub fn lines(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Quantity held for `code`, if the product is in the cart.
    #[must_use]
    pub fn quantity_of(&self, code: &ProductCode) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product.code() == code)
            .map(|line| line.quantity)
    }

    /// Move every line out, leaving this cart empty.
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub(crate) fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}
