//! Error types for elementwise einsum operations.

use alloc::string::String;
use alloc::vec::Vec;

use crate::dtype::{Casting, DType};

/// Errors that can occur during subscript parsing and evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum EinsumError {
    /// The subscript string has a leading, trailing or repeated `+`/`-`.
    #[cfg_attr(feature = "std", error("malformed subscripts '{subscripts}': {message}"))]
    MalformedSubscripts { subscripts: String, message: String },

    /// A segment result cannot be combined with the accumulator.
    #[cfg_attr(
        feature = "std",
        error("arrays for elementwise addition or subtraction must have equal shapes: expected {expected:?}, got {got:?}")
    )]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    /// The segments consume a different number of operands than were supplied.
    #[cfg_attr(feature = "std", error("subscripts require {expected} operands, got {got}"))]
    OperandCountMismatch { expected: usize, got: usize },

    /// A dtype conversion is not allowed by the selected casting rule.
    #[cfg_attr(feature = "std", error("cannot cast {from} to {to} with casting rule '{casting}'"))]
    CastingViolation {
        from: DType,
        to: DType,
        casting: Casting,
    },

    /// Error raised by the contraction primitive.
    #[cfg_attr(feature = "std", error("contraction error: {message}"))]
    Contraction { message: String },

    /// Explicit sublist subscripts that cannot be relabeled.
    #[cfg_attr(feature = "std", error("invalid sublist: {message}"))]
    InvalidSublist { message: String },
}

impl EinsumError {
    pub fn malformed(subscripts: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedSubscripts {
            subscripts: subscripts.into(),
            message: message.into(),
        }
    }

    pub fn contraction(message: impl Into<String>) -> Self {
        Self::Contraction {
            message: message.into(),
        }
    }

    pub fn sublist(message: impl Into<String>) -> Self {
        Self::InvalidSublist {
            message: message.into(),
        }
    }

    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Returns true for errors raised before any contraction runs.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedSubscripts { .. } | Self::OperandCountMismatch { .. } | Self::InvalidSublist { .. }
        )
    }
}

/// Result type for einsum operations.
pub type EinsumResult<T> = core::result::Result<T, EinsumError>;
