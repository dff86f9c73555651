//! Inkwell CLI - Console shopping session.
//!
//! Drives the `inkwell-core` domain from a line-oriented terminal dialogue:
//! register a customer, browse the catalog, fill a cart, check out, and list
//! past orders.
//!
//! Everything here is generic over `BufRead`/`Write`, so a whole session can
//! be scripted against in-memory buffers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod render;
pub mod session;

pub use commands::Shop;
pub use commands::register::Registration;
pub use config::{ConfigError, ShopConfig};
pub use console::Console;
pub use error::CliError;
