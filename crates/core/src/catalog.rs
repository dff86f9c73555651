//! Product catalog.
//!
//! The catalog is a fixed, ordered list of products loaded once at startup.
//! Lookups are linear scans and the first matching code wins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductCode;

/// A product that can be added to a cart.
///
/// Products are immutable and copied by value into carts and orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a new product.
    ///
    /// Negative prices are clamped to zero.
    #[must_use]
    pub fn new(code: ProductCode, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code,
            name: name.into(),
            price: price.max(Decimal::ZERO),
        }
    }

    /// The product's unique code.
    #[must_use]
    pub const fn code(&self) -> &ProductCode {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }
}

/// Read-only, ordered product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in stationery catalog.
    #[must_use]
    pub fn standard() -> Self {
        const ROWS: [(&str, &str, i64); 11] = [
            ("ABC", "Paper", 2000),
            ("CDE", "Pencil", 1000),
            ("QWE", "Pen", 1500),
            ("RTY", "Eraser", 500),
            ("UIO", "Notebook", 5000),
            ("PAS", "Ruler", 1200),
            ("DFG", "Marker", 2500),
            ("HJK", "Glue Stick", 800),
            ("LZX", "Scissors", 3000),
            ("CVB", "Highlighter", 1800),
            ("FEK", "Cutter", 700),
        ];

        let products = ROWS
            .iter()
            .map(|&(code, name, cents)| {
                Product::new(ProductCode::from_static(code), name, Decimal::new(cents, 2))
            })
            .collect();

        Self::new(products)
    }

    /// Find a product by code. The first match wins.
    #[must_use]
    pub fn find(&self, code: &ProductCode) -> Option<&Product> {
        self.products.iter().find(|product| product.code() == code)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
