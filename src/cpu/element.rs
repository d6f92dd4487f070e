//! Rust scalar types storable in a [`Tensor`].

use core::fmt::Debug;

use half::f16;
use ndarray::{ArrayD, LinalgScalar};

use super::tensor::Tensor;
use crate::dtype::DType;
use crate::notation::CombineOp;

/// Scalar type with a runtime [`DType`] tag.
///
/// Conversions go through `f64` or `i64` and follow `as` semantics, so they
/// may lose information; callers check [`crate::dtype::can_cast`] first.
pub trait Element: LinalgScalar + Debug + PartialEq {
    const DTYPE: DType;

    fn cast_to_f64(self) -> f64;
    fn cast_from_f64(value: f64) -> Self;
    fn cast_to_i64(self) -> i64;
    fn cast_from_i64(value: i64) -> Self;

    /// Applies `op` to two elements. Integer arithmetic wraps.
    fn apply(self, rhs: Self, op: CombineOp) -> Self;

    fn wrap(array: ArrayD<Self>) -> Tensor;
    fn as_array(tensor: &Tensor) -> Option<&ArrayD<Self>>;
    fn into_array(tensor: Tensor) -> Option<ArrayD<Self>>;
}

macro_rules! impl_element {
    (@base $ty:ty, $variant:ident) => {
        impl<D: ndarray::Dimension> From<ndarray::Array<$ty, D>> for Tensor {
            fn from(array: ndarray::Array<$ty, D>) -> Self {
                Tensor::$variant(array.into_dyn())
            }
        }
    };
    (@wrap $variant:ident) => {
        #[inline]
        fn wrap(array: ArrayD<Self>) -> Tensor {
            Tensor::$variant(array)
        }
        #[inline]
        fn as_array(tensor: &Tensor) -> Option<&ArrayD<Self>> {
            match tensor {
                Tensor::$variant(a) => Some(a),
                _ => None,
            }
        }
        #[inline]
        fn into_array(tensor: Tensor) -> Option<ArrayD<Self>> {
            match tensor {
                Tensor::$variant(a) => Some(a),
                _ => None,
            }
        }
    };
    ($ty:ty, $variant:ident, float) => {
        impl_element!(@base $ty, $variant);

        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn cast_to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn cast_from_f64(value: f64) -> Self {
                value as $ty
            }
            #[inline]
            fn cast_to_i64(self) -> i64 {
                self as i64
            }
            #[inline]
            fn cast_from_i64(value: i64) -> Self {
                value as $ty
            }
            #[inline]
            fn apply(self, rhs: Self, op: CombineOp) -> Self {
                match op {
                    CombineOp::Add => self + rhs,
                    CombineOp::Subtract => self - rhs,
                }
            }

            impl_element!(@wrap $variant);
        }
    };
    ($ty:ty, $variant:ident, int) => {
        impl_element!(@base $ty, $variant);

        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn cast_to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn cast_from_f64(value: f64) -> Self {
                value as $ty
            }
            #[inline]
            fn cast_to_i64(self) -> i64 {
                self as i64
            }
            #[inline]
            fn cast_from_i64(value: i64) -> Self {
                value as $ty
            }
            #[inline]
            fn apply(self, rhs: Self, op: CombineOp) -> Self {
                match op {
                    CombineOp::Add => self.wrapping_add(rhs),
                    CombineOp::Subtract => self.wrapping_sub(rhs),
                }
            }

            impl_element!(@wrap $variant);
        }
    };
}

impl_element!(f32, F32, float);
impl_element!(f64, F64, float);
impl_element!(i32, I32, int);
impl_element!(i64, I64, int);

impl<D: ndarray::Dimension> From<ndarray::Array<f16, D>> for Tensor {
    fn from(array: ndarray::Array<f16, D>) -> Self {
        Tensor::F16(array.into_dyn())
    }
}

impl Element for f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn cast_to_f64(self) -> f64 {
        f16::to_f64(self)
    }
    #[inline]
    fn cast_from_f64(value: f64) -> Self {
        f16::from_f64(value)
    }
    #[inline]
    fn cast_to_i64(self) -> i64 {
        f16::to_f64(self) as i64
    }
    #[inline]
    fn cast_from_i64(value: i64) -> Self {
        f16::from_f64(value as f64)
    }
    #[inline]
    fn apply(self, rhs: Self, op: CombineOp) -> Self {
        match op {
            CombineOp::Add => self + rhs,
            CombineOp::Subtract => self - rhs,
        }
    }

    impl_element!(@wrap F16);
}
