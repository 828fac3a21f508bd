//! # Roles
//!
//! The four collaborators of the order lifecycle. Each one guards its own
//! precondition before asking the order actor for a transition:
//!
//! | Role | Operation | Precondition | Rejection |
//! |------|-----------|--------------|-----------|
//! | [`Kitchen`] | `prepare` | none | - |
//! | [`Waiter`] | `serve_order` | `Ready` | `order_not_ready` |
//! | [`Waiter`] | `request_bill` | none | - |
//! | [`Cashier`] | `compute_total` | none | - |
//! | [`Cashier`] | `process_payment` | `Served` | `payment_rejected` |
//!
//! A rejection is a soft no-op: nothing is mutated, an event is emitted, and the call
//! still returns `Ok`. Callers may retry once the precondition holds. `Err` is reserved
//! for a missing order or a dead actor.

pub mod cashier;
pub mod customer;
pub mod kitchen;
pub mod waiter;

pub use cashier::*;
pub use customer::*;
pub use kitchen::*;
pub use waiter::*;
