//! # Storefront Simulation
//!
//! A local commerce engine: a product catalog fetched once at startup, user registration
//! and login, a cart, and a checkout flow, each owned by its own actor.
//!
//! ## Core Components
//!
//! - **[model]**: plain data (`Product`, `User`, `CartLine`, orders and receipts)
//! - **[catalog]**, **[user_actor]**, **[session]**, **[cart_actor]**, **[checkout]**:
//!   the actors and their state
//! - **[clients]**: typed wrappers that hide the message passing
//! - **[lifecycle]**: [`Storefront`](lifecycle::Storefront), which starts and wires the
//!   actors and maps customer actions onto them
//! - **[shell]**: the line-oriented front end of the `storefront` binary
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test an actor without spawning the
//! actors it depends on.

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod shell;
pub mod user_actor;
