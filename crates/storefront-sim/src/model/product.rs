//! Represents a product as delivered by the catalog source.
//!
//! Products are immutable once fetched and are owned by the catalog actor; every other
//! component works on copies.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// Identifier assigned by the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| format!("invalid product id: {s:?}"))
    }
}

/// One catalog entry. Fields the source sends beyond these four are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

impl Product {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            price,
            image: image.into(),
        }
    }

    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
