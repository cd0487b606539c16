//! [`ActorEntity`] implementation for [`CartLine`].

use super::CartError;
use crate::model::{CartLine, CartLineId, Product};
use actor_framework::ActorEntity;

impl ActorEntity for CartLine {
    type Id = CartLineId;
    type Create = Product;
    type Error = CartError;

    /// Wraps a product copy in a new line. Never fails; duplicates are kept.
    fn from_create_params(id: CartLineId, product: Product) -> Result<Self, Self::Error> {
        Ok(Self { id, product })
    }
}
