//! Inkwell - Console stationery shop.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session, prompting for registration
//! inkwell
//!
//! # Skip the registration prompts
//! inkwell --customer-id 7 --name "Ada Lovelace" --email ada@example.com
//!
//! # Show prices in euros
//! inkwell --currency eur
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;

use clap::Parser;
use inkwell_cli::{CliError, Console, Registration, Shop, ShopConfig, session};
use inkwell_core::{Catalog, CurrencyCode, CustomerId};

#[derive(Parser)]
#[command(name = "inkwell")]
#[command(author, version, about = "Inkwell console stationery shop")]
struct Cli {
    /// Customer ID (1-99); prompted for if omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=99))]
    customer_id: Option<u32>,

    /// Customer name; prompted for if omitted
    #[arg(long)]
    name: Option<String>,

    /// Customer email; prompted for if omitted
    #[arg(long)]
    email: Option<String>,

    /// Display currency (`usd`, `eur`, `gbp`, `cad`, `aud`); overrides `INKWELL_CURRENCY`
    #[arg(long)]
    currency: Option<CurrencyCode>,
}

fn main() {
    let cli = Cli::parse();

    // Loads `.env` as well, so it must run before the filter reads RUST_LOG
    let config = ShopConfig::from_env();

    // Defaults to warn for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inkwell_cli=warn,inkwell_core=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(cli, &config));

    if let Err(e) = result {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &ShopConfig) -> Result<(), CliError> {
    let currency = cli.currency.unwrap_or(config.currency);
    tracing::debug!(%currency, "Configuration loaded");

    let shop = Shop::new(Catalog::standard(), currency);
    let prefill = Registration {
        customer_id: cli.customer_id.map(CustomerId::new),
        name: cli.name,
        email: cli.email,
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    session::run(&mut console, &shop, &prefill)?;
    Ok(())
}
