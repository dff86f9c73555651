//! Customer aggregate: one live cart plus an append-only order history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::Product;
use crate::order::Order;
use crate::types::{AddOutcome, CustomerId, OrderId};

/// Errors returned by [`Customer::checkout`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing in the cart to check out.
    #[error("Your cart is empty. Cannot checkout.")]
    EmptyCart,
}

/// A registered customer.
///
/// Name and email are free-form and not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    cart: Cart,
    orders: Vec<Order>,
}

impl Customer {
    /// Register a customer with an empty cart and no orders.
    #[must_use]
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            cart: Cart::new(),
            orders: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Add a product to this customer's cart.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        self.cart.add_product(product, quantity)
    }

    /// Past orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up a past order by ID.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    /// Turn the cart into a new order and empty the cart.
    ///
    /// The new order gets ID `orders().len() + 1`. The order is appended and
    /// the cart cleared within this one call.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart is empty. Nothing is
    /// changed in that case.
    pub fn checkout(&mut self) -> Result<&Order, CheckoutError> {
        if self.cart.is_empty() {
            tracing::debug!(customer_id = %self.id, "Checkout rejected: empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let id = OrderId::after(self.orders.len());
        let order = Order::new(id, self.cart.take());

        tracing::info!(
            customer_id = %self.id,
            order_id = %order.id(),
            lines = order.line_count(),
            total = %order.total_amount(),
            "Order placed"
        );

        self.orders.push(order);
        self.orders.last().ok_or(CheckoutError::EmptyCart)
    }
}
