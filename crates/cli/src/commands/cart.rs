//! View the cart and optionally check out.

use std::io::{BufRead, Write};

use inkwell_core::Customer;

use super::Shop;
use crate::console::Console;
use crate::error::CliError;
use crate::input::is_yes;
use crate::render;

/// Show the cart. If it has anything in it, offer to check out.
///
/// # Errors
///
/// Returns an error if the console fails or input is closed.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shop: &Shop,
    customer: &mut Customer,
) -> Result<(), CliError> {
    for line in render::cart(customer.cart(), shop.currency) {
        console.say(line)?;
    }

    if customer.cart().is_empty() {
        return Ok(());
    }

    let answer = console.ask_nonblank("Do you want to checkout all the products? (Y/N): ")?;
    if !is_yes(&answer) {
        return Ok(());
    }

    match customer.checkout() {
        Ok(_) => console.say("Checkout successful!")?,
        Err(err) => console.say(err)?,
    }
    Ok(())
}
