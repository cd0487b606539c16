//! Checkout data: payment methods, the pending order snapshot and the receipt.
//!
//! None of these are persisted. A snapshot lives inside the checkout actor while
//! confirmation is pending; a receipt is handed back to the caller and forgotten.

use crate::model::{Product, User};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

/// The two supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("Credit Card"),
            PaymentMethod::PayPal => f.write_str("PayPal"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "creditcard" | "card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::PayPal),
            _ => Err(format!(
                "unknown payment method {s:?} (expected credit-card or paypal)"
            )),
        }
    }
}

/// Type-safe identifier for placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// What the customer is about to confirm: captured when confirmation is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub user: User,
    pub payment_method: PaymentMethod,
    pub items: Vec<Product>,
    pub total: Decimal,
}

/// Returned once an order has been placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub user: User,
    pub payment_method: PaymentMethod,
    pub item_count: usize,
    pub total: Decimal,
}
