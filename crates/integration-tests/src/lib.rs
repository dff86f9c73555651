//! Integration tests for Inkwell.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p inkwell-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_scenarios` - Full scripted console sessions
//! - `checkout_lifecycle` - Cart and order lifecycle through the public core API
//!
//! Sessions run against in-memory buffers; no terminal is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Cursor;

use inkwell_cli::{CliError, Console, Registration, Shop, session};
use inkwell_core::Customer;

/// Result of a scripted session.
pub struct Transcript {
    /// Customer state at logout, `None` if registration never finished.
    pub customer: Option<Customer>,
    /// Everything the session wrote to the console.
    pub output: String,
}

/// Run a full session over `input` with the standard shop.
///
/// # Errors
///
/// Returns an error if the session fails for a reason other than bad input.
pub fn run_script(input: &str) -> Result<Transcript, CliError> {
    run_script_with(&Shop::default(), &Registration::default(), input)
}

/// Run a full session over `input` with an explicit shop and prefill.
///
/// # Errors
///
/// Returns an error if the session fails for a reason other than bad input.
pub fn run_script_with(
    shop: &Shop,
    prefill: &Registration,
    input: &str,
) -> Result<Transcript, CliError> {
    let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new());
    let customer = session::run(&mut console, shop, prefill)?;
    let (_, output) = console.into_parts();

    Ok(Transcript {
        customer,
        output: String::from_utf8_lossy(&output).into_owned(),
    })
}

/// Build session input from one answer per line.
#[must_use]
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
