//! View products and add one to the cart.

use std::io::{BufRead, Write};

use inkwell_core::{AddOutcome, Customer, Product, ProductCode};

use super::Shop;
use crate::console::Console;
use crate::error::CliError;
use crate::render;

/// Typing this exactly returns to the menu. Matched before case folding,
/// so `EXIT` or `Exit` is looked up as a product code instead.
pub const EXIT_SENTINEL: &str = "exit";

pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 99;

pub const INVALID_PRODUCT: &str = "Invalid Product ID!";

/// Show the catalog, then let the user add one product to the cart.
///
/// # Errors
///
/// Returns an error if the console fails or input is closed.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shop: &Shop,
    customer: &mut Customer,
) -> Result<(), CliError> {
    for line in render::catalog(&shop.catalog, shop.currency) {
        console.say(line)?;
    }

    let raw = console.ask("Enter the Product ID to add to cart (or 'exit' to return to menu): ")?;
    if raw == EXIT_SENTINEL {
        return Ok(());
    }

    // Quantity is asked for every code, known or not, before the lookup.
    let quantity = console.ask_bounded_int("Enter quantity: ", QUANTITY_MIN, QUANTITY_MAX)?;

    let Some(product) = lookup(shop, &raw) else {
        tracing::debug!(input = %raw, quantity, "Unknown product code");
        console.say(INVALID_PRODUCT)?;
        return Ok(());
    };

    match customer.add_to_cart(product, quantity) {
        AddOutcome::Added => console.say("Product added successfully!")?,
        AddOutcome::Updated => console.say("Product quantity updated!")?,
    }
    Ok(())
}

fn lookup<'a>(shop: &'a Shop, raw: &str) -> Option<&'a Product> {
    let code = ProductCode::parse(raw).ok()?;
    shop.catalog.find(&code)
}
