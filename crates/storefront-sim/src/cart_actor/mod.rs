//! # Cart
//!
//! The ordered list of products added during this run, kept in a
//! [`ResourceActor`](actor_framework::ResourceActor). Lines are listed in the order they
//! were added, and the cart does not care whether anyone is logged in.
//!
//! Checkout empties the cart through the same `clear` the shell uses.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::model::CartLine;
use actor_framework::ResourceActor;

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartLine>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn add_grows_by_one_even_for_repeats() {
        let (actor, cart) = new(8);
        tokio::spawn(actor.run());
        let shoe = Product::new(1, "Red Shoe", Decimal::new(10, 0), "");

        for expected in 1..=3 {
            cart.add(shoe.clone()).await.unwrap();
            assert_eq!(cart.size().await.unwrap(), expected);
        }

        let items = cart.items().await.unwrap();
        assert!(items.iter().all(|p| *p == shoe));
        assert_eq!(cart.total().await.unwrap(), Decimal::new(30, 0));
    }

    #[tokio::test]
    async fn items_keep_insertion_order_and_clear_empties() {
        let (actor, cart) = new(8);
        tokio::spawn(actor.run());
        let hat = Product::new(2, "Blue Hat", Decimal::new(5, 0), "");
        let shoe = Product::new(1, "Red Shoe", Decimal::new(10, 0), "");

        cart.add(hat.clone()).await.unwrap();
        cart.add(shoe.clone()).await.unwrap();
        assert_eq!(cart.items().await.unwrap(), vec![hat, shoe]);

        assert_eq!(cart.clear().await.unwrap(), 2);
        assert_eq!(cart.size().await.unwrap(), 0);
        assert_eq!(cart.total().await.unwrap(), Decimal::ZERO);

        // Clearing an empty cart still succeeds
        assert_eq!(cart.clear().await.unwrap(), 0);
    }
}
