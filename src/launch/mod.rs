//! Launch module for elementwise einsum operations.
//!
//! Provides the high-level API that evaluates each segment on a backend and
//! folds the results together.

mod config;
mod executor;
mod subscripts;

pub use config::EinsumConfig;
pub use executor::{einsum, einsum_into};
pub use subscripts::Subscripts;
