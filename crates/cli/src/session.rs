//! The interactive menu loop.
//!
//! One command runs at a time: print the menu, read a choice, run the
//! matching handler, repeat until the user picks Exit or input runs out.

use std::io::{BufRead, Write};

use inkwell_core::Customer;

use crate::commands::register::Registration;
use crate::commands::{self, MenuChoice, Shop};
use crate::console::Console;
use crate::error::CliError;
use crate::render;

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const LOGGING_OUT: &str = "Logging out...";

/// Register a customer and run the menu loop until exit.
///
/// Returns the customer as they were at logout, or `None` if input closed
/// before registration finished.
///
/// # Errors
///
/// Returns an error only if reading or writing the console fails.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shop: &Shop,
    prefill: &Registration,
) -> Result<Option<Customer>, CliError> {
    let mut customer = match commands::register::run(console, prefill) {
        Ok(customer) => customer,
        Err(CliError::InputClosed) => {
            tracing::warn!("Input closed during registration");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    loop {
        match step(console, shop, &mut customer) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CliError::InputClosed) => {
                tracing::warn!("Input closed, ending session");
                console.say("")?;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    console.say(LOGGING_OUT)?;
    tracing::info!(
        customer_id = %customer.id(),
        orders = customer.orders().len(),
        "Session ended"
    );
    Ok(Some(customer))
}

enum Flow {
    Continue,
    Exit,
}

fn step<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shop: &Shop,
    customer: &mut Customer,
) -> Result<Flow, CliError> {
    for line in render::menu() {
        console.say(line)?;
    }
    let raw = console.ask("Enter your choice: ")?;

    match MenuChoice::parse(&raw) {
        Some(MenuChoice::ViewProducts) => commands::products::run(console, shop, customer)?,
        Some(MenuChoice::ViewCart) => commands::cart::run(console, shop, customer)?,
        Some(MenuChoice::ViewOrders) => commands::orders::run(console, shop, customer)?,
        Some(MenuChoice::Exit) => return Ok(Flow::Exit),
        None => {
            tracing::debug!(input = %raw, "Invalid menu choice");
            console.say(INVALID_CHOICE)?;
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str) -> (Option<Customer>, String) {
        let shop = Shop::default();
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let customer = run(&mut console, &shop, &Registration::default()).unwrap();
        (customer, String::from_utf8(console.into_parts().1).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (customer, out) = session("1\nAda\na@b.c\n4\n");
        let customer = customer.unwrap();

        assert_eq!(customer.name(), "Ada");
        assert!(out.contains("\nMenu\n1 - View Products\n"));
        assert!(out.ends_with("Enter your choice: Logging out...\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_, out) = session("1\nAda\na@b.c\n9\nfoo\n4\n");
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches("\nMenu\n").count(), 3);
    }

    #[test]
    fn test_input_closed_ends_session() {
        let (customer, out) = session("1\nAda\na@b.c\n3\n");
        assert!(customer.is_some());
        assert!(out.contains("No orders found."));
        assert!(out.ends_with("Logging out...\n"));
    }

    #[test]
    fn test_input_closed_during_registration() {
        let (customer, out) = session("1\nAda\n");
        assert!(customer.is_none());
        assert!(!out.contains(LOGGING_OUT));
    }
}
