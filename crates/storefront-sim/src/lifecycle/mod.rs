//! # System Lifecycle & Orchestration
//!
//! Starts the storefront's actors, wires them together and shuts them down.
//!
//! ## Wiring
//!
//! Actors are created first, with no dependencies, and receive the clients they depend
//! on when they are started (`run(context)`):
//!
//! | Actor | Kind | Context |
//! |-------|------|---------|
//! | user directory | `ResourceActor<User>` | none |
//! | cart | `ResourceActor<CartLine>` | none |
//! | catalog | `StateActor<Catalog>` | `Arc<dyn CatalogSource>` |
//! | session | `StateActor<Session>` | `UserClient` |
//! | checkout | `StateActor<Checkout>` | `(SessionClient, CartClient)` |
//!
//! ## Graceful Shutdown
//!
//! The graph above is acyclic. Dropping the [`Storefront`]'s clients closes the checkout
//! channel, the checkout actor exits and drops its session and cart clients, and so on
//! down to the user directory. [`Storefront::shutdown`] waits for every task.

pub mod storefront;

pub use storefront::*;
