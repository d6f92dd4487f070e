//! Element types and casting rules.
//!
//! Tensors carry their element type at runtime so that segment results of
//! different dtypes can be combined under an explicit [`Casting`] rule.

mod promotion;

pub use promotion::{can_cast, promote};

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Element types understood by the casting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    F16,
    F32,
    F64,
    I32,
    I64,
}

impl DType {
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }

    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, DType::I32 | DType::I64)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DType::F16 => "float16",
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::I32 => "int32",
            DType::I64 => "int64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which implicit dtype conversions are permitted.
///
/// Mirrors the NumPy casting levels, from strictest to most permissive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casting {
    /// Only identical dtypes.
    No,
    /// Identical dtypes, allowing byte-order changes. Equivalent to `No` here.
    Equiv,
    /// Only conversions that preserve every value.
    #[default]
    Safe,
    /// Safe conversions, or conversions within a kind (e.g. `float64` to `float32`).
    SameKind,
    /// Any conversion.
    Unsafe,
}

impl Casting {
    pub const fn as_str(self) -> &'static str {
        match self {
            Casting::No => "no",
            Casting::Equiv => "equiv",
            Casting::Safe => "safe",
            Casting::SameKind => "same_kind",
            Casting::Unsafe => "unsafe",
        }
    }
}

impl fmt::Display for Casting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown casting rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCastingError;

impl fmt::Display for ParseCastingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("casting must be one of 'no', 'equiv', 'safe', 'same_kind', or 'unsafe'")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCastingError {}

impl FromStr for Casting {
    type Err = ParseCastingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(Casting::No),
            "equiv" => Ok(Casting::Equiv),
            "safe" => Ok(Casting::Safe),
            "same_kind" => Ok(Casting::SameKind),
            "unsafe" => Ok(Casting::Unsafe),
            _ => Err(ParseCastingError),
        }
    }
}
