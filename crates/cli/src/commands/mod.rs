//! Menu command handlers.
//!
//! Each handler takes the console, the shop and the customer explicitly and
//! returns once its exchange with the user is finished.

pub mod cart;
pub mod orders;
pub mod products;
pub mod register;

use inkwell_core::{Catalog, CurrencyCode};

use crate::input::parse_bounded_int;

/// Read-only shop state shared by every command.
#[derive(Debug, Clone)]
pub struct Shop {
    pub catalog: Catalog,
    pub currency: CurrencyCode,
}

impl Shop {
    #[must_use]
    pub const fn new(catalog: Catalog, currency: CurrencyCode) -> Self {
        Self { catalog, currency }
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(Catalog::standard(), CurrencyCode::default())
    }
}

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    ViewCart,
    ViewOrders,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Returns `None` for anything other than 1-4.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match parse_bounded_int(raw, 1, 4).ok()? {
            1 => Some(Self::ViewProducts),
            2 => Some(Self::ViewCart),
            3 => Some(Self::ViewOrders),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}
