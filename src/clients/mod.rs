//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod order_client;
pub mod order_handle;

pub use order_client::*;
pub use order_handle::*;
