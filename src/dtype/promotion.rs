//! Type promotion and cast permission rules.

use super::{Casting, DType};

/// Promotes two dtypes to the common dtype of a binary operation.
///
/// Follows NumPy `result_type`:
/// - Floats win over integers
/// - Larger types win over smaller types
/// - Mixing a 32/64-bit integer with a float needs `float64` to hold every value
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    match (lhs, rhs) {
        (I32 | I64, F16 | F32 | F64) | (F16 | F32 | F64, I32 | I64) => F64,
        _ => {
            let priority = |dt: DType| -> u8 {
                match dt {
                    F64 => 100,
                    F32 => 90,
                    F16 => 80,
                    I64 => 65,
                    I32 => 55,
                }
            };
            if priority(lhs) >= priority(rhs) { lhs } else { rhs }
        }
    }
}

/// Returns true if values of `from` may be converted to `to` under `casting`.
pub fn can_cast(from: DType, to: DType, casting: Casting) -> bool {
    if from == to {
        return true;
    }

    match casting {
        Casting::No | Casting::Equiv => false,
        Casting::Safe => is_safe(from, to),
        Casting::SameKind => is_safe(from, to) || kind(from) <= kind(to),
        Casting::Unsafe => true,
    }
}

fn is_safe(from: DType, to: DType) -> bool {
    use DType::*;

    matches!(
        (from, to),
        (F16, F32 | F64) | (F32, F64) | (I32, I64 | F64) | (I64, F64)
    )
}

/// Kind ordering: integers rank below floats.
fn kind(dtype: DType) -> u8 {
    if dtype.is_float() { 1 } else { 0 }
}
