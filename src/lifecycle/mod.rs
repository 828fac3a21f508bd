//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the simulation.
//!
//! ## The Restaurant Pattern
//!
//! [`Restaurant`] is the composition root. It creates the order actor with no
//! dependencies, then injects the [`EventBus`](crate::events::EventBus) when the actor
//! starts, and finally builds the roles on top of the actor's client:
//!
//! ```rust,ignore
//! let (order_actor, client) = order_actor::new(config.mailbox_capacity);
//! let handle = tokio::spawn(order_actor.run(events.clone()));
//!
//! let orders = OrderClient::new(client);
//! let kitchen = Kitchen::new(orders.clone(), config.preparation_delay);
//! let cashier = Cashier::new(orders.clone(), events.clone(), config.unit_price);
//! let waiter = Waiter::new(orders.clone(), kitchen, cashier.clone(), events.clone());
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** held by the restaurant, its waiter and its cashier.
//! 2. **Pending preparations finish**: each scheduled `Ready` transition holds its own
//!    client, so the actor keeps running until the last one has fired.
//! 3. **Await the actor task**.
//!
//! ## Configuration
//!
//! [`RestaurantConfig`] carries the tunables (preparation delay, unit price, channel
//! capacities). Defaults match the reference scenario; [`RestaurantConfig::from_env`]
//! reads overrides from `RESTAURANT_*` variables.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. See [`tracing`](self::tracing).

pub mod config;
pub mod restaurant;
pub mod tracing;

pub use config::*;
pub use restaurant::*;
pub use self::tracing::setup_tracing;
