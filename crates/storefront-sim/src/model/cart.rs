use crate::model::Product;
use rust_decimal::Decimal;
use std::fmt::Display;

/// Type-safe identifier for cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartLineId(pub u32);

impl From<u32> for CartLineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// One entry in the cart: a copy of the product as it was when added.
///
/// Adding the same product twice yields two lines; there is no quantity field.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: CartLineId,
    pub product: Product,
}

/// Sum of the product prices.
pub fn cart_total<'a>(products: impl IntoIterator<Item = &'a Product>) -> Decimal {
    products.into_iter().map(|p| p.price).sum()
}
