//! # Elementwise Einsum
//!
//! Einstein summation with elementwise `+` and `-` between contractions.
//!
//! ## Features
//!
//! - Several einsum expressions in one subscript string, e.g. `ij,jk->ik+ik`
//! - Strict left-to-right folding into a single accumulator
//! - Exact shape checks at every combination (no broadcasting)
//! - NumPy-style casting rules for contractions and combinations
//! - Optional output buffer written in place
//! - Pluggable contraction backend, with an `ndarray` reference backend
//!
//! ## Example
//!
//! ```ignore
//! use einsum_elementwise::{einsum, cpu::NdarrayBackend};
//!
//! // Matrix multiplication plus a bias
//! let y = einsum(&NdarrayBackend, "ij,jk->ik+ik", &[&a, &b, &bias], None)?;
//!
//! // Commutator of two matrices
//! let c = einsum(&NdarrayBackend, "ij,jk->ik-ij,jk->ik", &[&a, &b, &b, &a], None)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod backend;
pub mod dtype;
pub mod error;
pub mod launch;
pub mod notation;

#[cfg(feature = "ndarray")]
pub mod cpu;

pub use backend::{ContractOptions, ContractionBackend};
pub use dtype::{Casting, DType};
pub use error::{EinsumError, EinsumResult};
pub use launch::{EinsumConfig, Subscripts, einsum, einsum_into};
pub use notation::{CombineOp, ElementwiseExpression, Segment, parse_elementwise};
