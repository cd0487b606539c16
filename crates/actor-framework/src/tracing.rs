//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! process.
//!
//! - Filtering comes from `RUST_LOG`; without it only warnings and errors are shown.
//! - Module paths are hidden (`with_target(false)`); actors log an `entity_type` or
//!   `state_type` field instead.
//! - Output goes to stderr, so a program can keep stdout for its own results.
//!
//! ```bash
//! RUST_LOG=info storefront     # lifecycle and mutations
//! RUST_LOG=debug storefront    # every request with its payload
//! ```
//!
//! With `RUST_LOG=debug` a cart add looks like:
//!
//! ```text
//! DEBUG add: Sending request product_id=2
//! DEBUG Create entity_type="CartLine" params=Product { id: ProductId(2), title: "Blue Hat", .. }
//!  INFO Created entity_type="CartLine" id=line_1 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Calling it again is a no-op.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
