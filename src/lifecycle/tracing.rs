//! # Observability & Tracing
//!
//! Every [`RestaurantEvent`](crate::events::RestaurantEvent) is logged at `info` when it
//! is emitted, so the default filter narrates a run:
//!
//! ```text
//! INFO Juan requests order_1: Pizza, Refresco order_id=order_1
//! INFO order_1 changed from requested to in preparation order_id=order_1
//! INFO preparation: order_1 changed from in preparation to ready order_id=order_1
//! ```
//!
//! `RUST_LOG=debug` adds the actor's request log (`Create`, `Get`, `Action`) and the
//! client payloads. Kitchen background work runs inside a `preparation` span.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=restaurant_sim::roles=debug cargo run
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
