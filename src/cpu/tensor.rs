//! Dtype-tagged dense tensor backed by `ndarray`.

use alloc::borrow::Cow;

use half::f16;
use ndarray::{ArrayD, IxDyn};

use super::element::Element;
use crate::dtype::{Casting, DType, can_cast};
use crate::error::{EinsumError, EinsumResult};

/// A dense, row-major tensor whose element type is chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    F16(ArrayD<f16>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
}

macro_rules! with_array {
    ($tensor:expr, $a:ident => $body:expr) => {
        match $tensor {
            Tensor::F16($a) => $body,
            Tensor::F32($a) => $body,
            Tensor::F64($a) => $body,
            Tensor::I32($a) => $body,
            Tensor::I64($a) => $body,
        }
    };
}

pub(crate) use with_array;

impl Tensor {
    /// Creates a zero-filled tensor.
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let shape = IxDyn(shape);
        match dtype {
            DType::F16 => Tensor::F16(ArrayD::zeros(shape)),
            DType::F32 => Tensor::F32(ArrayD::zeros(shape)),
            DType::F64 => Tensor::F64(ArrayD::zeros(shape)),
            DType::I32 => Tensor::I32(ArrayD::zeros(shape)),
            DType::I64 => Tensor::I64(ArrayD::zeros(shape)),
        }
    }

    /// Creates a tensor from a shape and row-major data.
    pub fn from_shape_vec<E: Element>(shape: &[usize], data: alloc::vec::Vec<E>) -> EinsumResult<Self> {
        let len = data.len();
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(E::wrap)
            .map_err(|_| EinsumError::ShapeMismatch {
                expected: shape.to_vec(),
                got: alloc::vec![len],
            })
    }

    pub fn dtype(&self) -> DType {
        match self {
            Tensor::F16(_) => DType::F16,
            Tensor::F32(_) => DType::F32,
            Tensor::F64(_) => DType::F64,
            Tensor::I32(_) => DType::I32,
            Tensor::I64(_) => DType::I64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, a => a.shape())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        with_array!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the underlying array if it holds elements of type `E`.
    pub fn as_array<E: Element>(&self) -> Option<&ArrayD<E>> {
        E::as_array(self)
    }

    /// Unwraps the underlying array if it holds elements of type `E`.
    pub fn into_array<E: Element>(self) -> Option<ArrayD<E>> {
        E::into_array(self)
    }

    /// Converts to `to`, failing if `casting` does not permit it.
    pub fn cast(&self, to: DType, casting: Casting) -> EinsumResult<Tensor> {
        if !can_cast(self.dtype(), to, casting) {
            return Err(EinsumError::CastingViolation {
                from: self.dtype(),
                to,
                casting,
            });
        }
        Ok(self.cast_unchecked(to))
    }

    pub(crate) fn cast_unchecked(&self, to: DType) -> Tensor {
        if self.dtype() == to {
            return self.clone();
        }
        match to {
            DType::F16 => Tensor::F16(self.to_array::<f16>()),
            DType::F32 => Tensor::F32(self.to_array::<f32>()),
            DType::F64 => Tensor::F64(self.to_array::<f64>()),
            DType::I32 => Tensor::I32(self.to_array::<i32>()),
            DType::I64 => Tensor::I64(self.to_array::<i64>()),
        }
    }

    /// Views the elements as `E`, converting without a casting check.
    pub(crate) fn elements_as<E: Element>(&self) -> Cow<'_, ArrayD<E>> {
        match E::as_array(self) {
            Some(a) => Cow::Borrowed(a),
            None => Cow::Owned(self.to_array::<E>()),
        }
    }

    fn to_array<E: Element>(&self) -> ArrayD<E> {
        with_array!(self, a => convert(a))
    }

    /// Overwrites the elements with `src`, converted to this tensor's dtype.
    /// Shapes must match.
    pub(crate) fn assign_from(&mut self, src: &Tensor) {
        with_array!(self, dst => assign_elements(dst, src))
    }
}

fn assign_elements<E: Element>(dst: &mut ArrayD<E>, src: &Tensor) {
    dst.assign(&*src.elements_as::<E>());
}

fn convert<S: Element, D: Element>(src: &ArrayD<S>) -> ArrayD<D> {
    if S::DTYPE.is_int() && D::DTYPE.is_int() {
        src.mapv(|v| D::cast_from_i64(v.cast_to_i64()))
    } else {
        src.mapv(|v| D::cast_from_f64(v.cast_to_f64()))
    }
}
