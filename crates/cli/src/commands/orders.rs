//! View order history.

use std::io::{BufRead, Write};

use inkwell_core::Customer;

use super::Shop;
use crate::console::Console;
use crate::error::CliError;
use crate::render;

/// Print every past order, oldest first.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shop: &Shop,
    customer: &Customer,
) -> Result<(), CliError> {
    for line in render::orders(customer.orders(), shop.currency) {
        console.say(line)?;
    }
    Ok(())
}
