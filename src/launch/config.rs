//! Configuration for elementwise einsum operations.

use serde::{Deserialize, Serialize};

use crate::backend::ContractOptions;
use crate::dtype::{Casting, DType};

/// Configuration options for elementwise einsum execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EinsumConfig {
    /// Casting rule for every contraction and every combination.
    pub casting: Casting,
    /// Requested result dtype of each contraction.
    pub dtype: Option<DType>,
    /// Whether to reject operand lists the segments do not consume exactly.
    pub check_operand_count: bool,
}

impl Default for EinsumConfig {
    fn default() -> Self {
        Self {
            casting: Casting::Safe,
            dtype: None,
            check_operand_count: true,
        }
    }
}

impl EinsumConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the casting rule.
    pub fn with_casting(mut self, casting: Casting) -> Self {
        self.casting = casting;
        self
    }

    /// Requests a result dtype for each contraction.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Enables or disables the operand count check.
    pub fn with_operand_count_check(mut self, enabled: bool) -> Self {
        self.check_operand_count = enabled;
        self
    }

    /// Creates a config that only allows value-preserving casts.
    pub fn safe() -> Self {
        Self::default()
    }

    /// Creates a config that allows any cast.
    pub fn unsafe_casting() -> Self {
        Self {
            casting: Casting::Unsafe,
            ..Self::default()
        }
    }

    /// Options passed to each contraction call.
    pub fn contract_options(&self) -> ContractOptions {
        ContractOptions {
            casting: self.casting,
            dtype: self.dtype,
        }
    }
}
