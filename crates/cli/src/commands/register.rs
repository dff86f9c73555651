//! Customer registration at session start.

use std::io::{BufRead, Write};

use inkwell_core::{Customer, CustomerId};

use crate::console::Console;
use crate::error::CliError;

pub const CUSTOMER_ID_MIN: u32 = 1;
pub const CUSTOMER_ID_MAX: u32 = 99;

/// Registration values supplied up front, e.g. from command-line flags.
///
/// Any field left as `None` is asked for on the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub customer_id: Option<CustomerId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Register the session's customer.
///
/// # Errors
///
/// Returns an error if the console fails or input is closed.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prefill: &Registration,
) -> Result<Customer, CliError> {
    console.say("Register a new customer")?;

    let id = match prefill.customer_id {
        Some(id) => id,
        None => CustomerId::new(console.ask_bounded_int(
            "Enter Customer ID: ",
            CUSTOMER_ID_MIN,
            CUSTOMER_ID_MAX,
        )?),
    };

    let name = match &prefill.name {
        Some(name) => name.clone(),
        None => console.ask("Enter Name: ")?,
    };

    let email = match &prefill.email {
        Some(email) => email.clone(),
        None => console.ask("Enter Email: ")?,
    };

    tracing::info!(customer_id = %id, "Customer registered");
    Ok(Customer::new(id, name, email))
}
