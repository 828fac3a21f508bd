//! # Restaurant Simulation
//!
//! > **An order lifecycle run by four roles on top of a single order actor.**
//!
//! A customer asks a waiter for an order, the kitchen prepares it in the background,
//! the waiter serves it and asks for the bill, and the cashier takes payment. Every
//! order walks exactly one path:
//!
//! ```text
//! Requested -> InPreparation -> Ready -> Served -> Paid
//! ```
//!
//! ## Design
//!
//! ### Passive orders, guarded roles
//! [`Order::set_status`](model::Order::set_status) overwrites and reports; it never
//! refuses. The roles in [`roles`] decide whether a transition is allowed. Serving
//! requires `Ready`, paying requires `Served`, and a failed check is a *soft no-op*: no
//! mutation, one rejection event, and an `Ok` return so the caller can retry later.
//!
//! ### One actor, one writer
//! All orders live in a [`ResourceActor`](framework::ResourceActor) task. Requests are
//! processed one at a time, and a guarded transition travels as a single
//! compare-and-set message, so two roles racing on the same order cannot both win.
//! Any number of orders progress independently.
//!
//! ### Fire-and-forget preparation
//! [`Kitchen::prepare`](roles::Kitchen::prepare) stores `InPreparation`, spawns a Tokio
//! task that sleeps for the preparation delay and stores `Ready`, and returns at once.
//! Nothing waits on that task; the `status_changed` event is the only signal.
//!
//! ### Events, not narration
//! Every role reports through the [`events::EventBus`]. Subscribers receive typed
//! [`RestaurantEvent`](events::RestaurantEvent)s; the same events are logged with
//! `tracing`.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: generic actor, client and mocks
//! - [`model`]: [`Order`](model::Order), [`OrderStatus`](model::OrderStatus)
//! - [`order_actor`]: the `ActorEntity` impl and the order actions
//! - [`clients`]: [`OrderClient`](clients::OrderClient) and [`OrderHandle`](clients::OrderHandle)
//! - [`roles`]: [`Waiter`](roles::Waiter), [`Kitchen`](roles::Kitchen),
//!   [`Cashier`](roles::Cashier), [`Customer`](roles::Customer)
//! - [`events`]: the event stream
//! - [`lifecycle`]: [`Restaurant`](lifecycle::Restaurant), configuration and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RESTAURANT_PREP_DELAY_MS=500 cargo run
//! cargo test
//! ```
//!
//! ## Known gaps
//!
//! Items are not validated. An empty order totals zero and can still be served and paid.

pub mod clients;
pub mod events;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod roles;
