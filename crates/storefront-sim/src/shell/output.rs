//! Output formatting for the shell.

use crate::error::StorefrontError;
use crate::lifecycle::{CartView, Outcome};
use crate::model::{OrderReceipt, OrderSnapshot, Product};
use console::{style, Term};
use rust_decimal::Decimal;

/// Writes outcomes and errors to the terminal.
#[derive(Clone)]
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn prompt(&self) {
        let _ = self.term.write_str(&format!("{} ", style(">").cyan().bold()));
    }

    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Failures carry their category, e.g. `AuthError: Invalid email or password`.
    pub fn failure(&self, err: &StorefrontError) {
        let label = err.kind().label();
        eprintln!("{} {}", style("✗").red(), style(format!("{label}: {err}")).red());
    }

    pub fn usage(&self, msg: &str) {
        eprintln!("{}", msg.trim_end());
    }

    pub fn plain(&self, text: &str) {
        println!("{}", text.trim_end());
    }

    fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    fn kv(&self, key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    fn products(&self, products: &[Product]) {
        for product in products {
            println!("  {}", product_row(product));
        }
    }

    /// Prints everything an outcome has to show: its notice first, then any listing.
    pub fn outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::SearchResults(products) if products.is_empty() => {}
            _ => {
                if let Some(notice) = outcome.notice() {
                    self.success(&notice);
                }
            }
        }

        match outcome {
            Outcome::Products(products) if products.is_empty() => {
                self.info("The catalog is empty");
            }
            Outcome::Products(products) | Outcome::CatalogLoaded(products) => {
                self.products(products)
            }
            Outcome::SearchResults(products) if products.is_empty() => {
                if let Some(notice) = outcome.notice() {
                    self.info(&notice);
                }
            }
            Outcome::SearchResults(products) => self.products(products),
            Outcome::AddedToCart { cart_size, .. } => {
                self.kv("items in cart", &cart_size.to_string());
            }
            Outcome::Cart(view) => self.cart(view),
            Outcome::AwaitingConfirmation(snapshot) => self.review(snapshot),
            Outcome::OrderPlaced(receipt) => self.receipt(receipt),
            _ => {}
        }
    }

    fn cart(&self, view: &CartView) {
        self.header("Cart");
        if view.items.is_empty() {
            self.info("Your cart is empty");
        }
        self.products(&view.items);
        self.kv("total", &price(view.total));
        self.kv(
            "payment",
            &view
                .payment_method
                .map_or_else(|| "not selected".to_string(), |m| m.to_string()),
        );
        self.kv(
            "logged in as",
            view.user.as_ref().map_or("nobody", |u| u.email.as_str()),
        );
    }

    fn review(&self, snapshot: &OrderSnapshot) {
        self.header("Confirm Order");
        self.kv("customer", &snapshot.user.email);
        self.kv("payment", &snapshot.payment_method.to_string());
        self.products(&snapshot.items);
        self.kv("total", &price(snapshot.total));
        self.info("Type `confirm` to place the order or `cancel` to go back");
    }

    fn receipt(&self, receipt: &OrderReceipt) {
        self.kv("order", &receipt.order_id.to_string());
        self.kv("items", &receipt.item_count.to_string());
        self.kv("total", &price(receipt.total));
        self.kv("paid with", &receipt.payment_method.to_string());
    }
}

fn price(amount: Decimal) -> String {
    format!("${}", amount.round_dp(2))
}

/// `#<id>  <title>  $<price>`
pub fn product_row(product: &Product) -> String {
    format!(
        "{}  {}  {}",
        style(format!("#{:<3}", product.id.0)).dim(),
        product.title,
        style(price(product.price)).green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_row_shows_id_title_and_price() {
        console::set_colors_enabled(false);
        let row = product_row(&Product::new(12, "Blue Hat", Decimal::new(5, 0), ""));
        assert_eq!(row, "#12   Blue Hat  $5");
    }

    #[test]
    fn prices_are_rounded_to_cents() {
        assert_eq!(price(Decimal::new(109_955, 3)), "$109.96");
        assert_eq!(price(Decimal::new(2250, 2)), "$22.50");
    }
}
