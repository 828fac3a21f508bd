//! Pure data: the [`Order`] and its lifecycle states.

pub mod order;

pub use order::*;
