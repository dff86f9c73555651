//! Text rendering for catalog, cart and order views.
//!
//! Each view is an iterator of lines. Calling the function again starts a
//! fresh pass, so the same view can be printed any number of times.

use inkwell_core::{Cart, CartLine, Catalog, CurrencyCode, Order, Price, Product};

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 10;
const QUANTITY_WIDTH: usize = 10;

pub const EMPTY_CART: &str = "Your cart is empty.";
pub const NO_ORDERS: &str = "No orders found.";

type Lines<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// The main menu, including the leading blank line.
pub fn menu() -> impl Iterator<Item = &'static str> {
    [
        "",
        "Menu",
        "1 - View Products",
        "2 - View Shopping Cart",
        "3 - View Orders",
        "4 - Exit",
    ]
    .into_iter()
}

fn catalog_header() -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}",
        "Product ID", "Name", "Price"
    )
}

fn line_header() -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}{:<QUANTITY_WIDTH$}",
        "Product ID", "Name", "Price", "Quantity"
    )
}

fn product_row(product: &Product, currency: CurrencyCode) -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}",
        product.code(),
        product.name(),
        Price::new(product.price(), currency)
    )
}

fn line_row(line: &CartLine, currency: CurrencyCode) -> String {
    format!(
        "{}{:<QUANTITY_WIDTH$}",
        product_row(&line.product, currency),
        line.quantity
    )
}

/// Catalog table: header then one row per product.
pub fn catalog(catalog: &Catalog, currency: CurrencyCode) -> impl Iterator<Item = String> + '_ {
    std::iter::once(catalog_header()).chain(catalog.iter().map(move |p| product_row(p, currency)))
}

fn line_table<'a>(
    lines: impl Iterator<Item = &'a CartLine> + 'a,
    currency: CurrencyCode,
) -> impl Iterator<Item = String> + 'a {
    std::iter::once(line_header()).chain(lines.map(move |line| line_row(line, currency)))
}

/// Cart table, or the empty-cart message.
pub fn cart(cart: &Cart, currency: CurrencyCode) -> Lines<'_> {
    if cart.is_empty() {
        return Box::new(std::iter::once(EMPTY_CART.to_string()));
    }
    Box::new(line_table(cart.lines(), currency))
}

/// One order: header block, line table, trailing blank line.
pub fn order(order: &Order, currency: CurrencyCode) -> impl Iterator<Item = String> + '_ {
    let header = [
        format!("Order ID: {}", order.id()),
        format!("Placed: {}", order.placed_at().format("%Y-%m-%d %H:%M:%S UTC")),
        format!(
            "Total Amount: {}",
            Price::new(order.total_amount(), currency)
        ),
        "Order Details:".to_string(),
    ];

    header
        .into_iter()
        .chain(line_table(order.lines(), currency))
        .chain(std::iter::once(String::new()))
}

/// Every order in placement order, or the no-orders message.
pub fn orders(orders: &[Order], currency: CurrencyCode) -> Lines<'_> {
    if orders.is_empty() {
        return Box::new(std::iter::once(NO_ORDERS.to_string()));
    }
    Box::new(orders.iter().flat_map(move |o| order(o, currency)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use inkwell_core::{Customer, CustomerId, ProductCode};

    use super::*;

    fn product<'a>(catalog: &'a Catalog, code: &str) -> &'a Product {
        catalog.find(&ProductCode::parse(code).unwrap()).unwrap()
    }

    #[test]
    fn test_catalog_columns() {
        let catalog = Catalog::standard();
        let lines: Vec<String> = super::catalog(&catalog, CurrencyCode::USD).collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], format!("{:<12}{:<20}{:<10}", "Product ID", "Name", "Price"));
        assert_eq!(lines[1], format!("{:<12}{:<20}{:<10}", "ABC", "Paper", "$20.00"));
        assert_eq!(lines[8], format!("{:<12}{:<20}{:<10}", "HJK", "Glue Stick", "$8.00"));
    }

    #[test]
    fn test_catalog_currency() {
        let catalog = Catalog::standard();
        let row = super::catalog(&catalog, CurrencyCode::EUR).nth(2).unwrap();
        assert!(row.contains("€10.00"));
    }

    #[test]
    fn test_empty_cart_message() {
        let lines: Vec<String> = cart(&Cart::new(), CurrencyCode::USD).collect();
        assert_eq!(lines, [EMPTY_CART]);
    }

    #[test]
    fn test_cart_rows() {
        let catalog = Catalog::standard();
        let mut c = Cart::new();
        c.add_product(product(&catalog, "qwe"), 3);

        let lines: Vec<String> = cart(&c, CurrencyCode::USD).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Product ID  Name"));
        assert_eq!(
            lines[1],
            format!("{:<12}{:<20}{:<10}{:<10}", "QWE", "Pen", "$15.00", 3)
        );
    }

    #[test]
    fn test_cart_view_restartable() {
        let catalog = Catalog::standard();
        let mut c = Cart::new();
        c.add_product(product(&catalog, "RTY"), 1);

        let first: Vec<String> = cart(&c, CurrencyCode::USD).collect();
        let second: Vec<String> = cart(&c, CurrencyCode::USD).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_orders_message() {
        let lines: Vec<String> = orders(&[], CurrencyCode::USD).collect();
        assert_eq!(lines, [NO_ORDERS]);
    }

    #[test]
    fn test_order_block() {
        let catalog = Catalog::standard();
        let mut customer = Customer::new(CustomerId::new(1), "Ada", "ada@example.com");
        customer.add_to_cart(product(&catalog, "UIO"), 2);
        customer.checkout().unwrap();

        let lines: Vec<String> = orders(customer.orders(), CurrencyCode::USD).collect();
        assert_eq!(lines[0], "Order ID: 1");
        assert!(lines[1].starts_with("Placed: "));
        assert_eq!(lines[2], "Total Amount: $100.00");
        assert_eq!(lines[3], "Order Details:");
        assert!(lines[4].starts_with("Product ID"));
        assert!(lines[5].starts_with(&format!("{:<12}{:<20}", "UIO", "Notebook")));
        assert_eq!(lines[6], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_menu() {
        let lines: Vec<&str> = menu().collect();
        assert_eq!(lines.first(), Some(&""));
        assert_eq!(lines.last(), Some(&"4 - Exit"));
    }
}
