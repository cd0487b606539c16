//! Typed clients, one per actor. Each wraps a generic framework client and turns
//! [`FrameworkError`](actor_framework::FrameworkError) back into the component's own error.

pub mod cart_client;
pub mod catalog_client;
pub mod checkout_client;
pub mod session_client;
pub mod user_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use checkout_client::*;
pub use session_client::*;
pub use user_client::*;
