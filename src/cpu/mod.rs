//! Reference CPU backend built on `ndarray`.
//!
//! Contraction is delegated to `ndarray_einsum_beta`; this module adds the
//! dtype handling (promotion and casting checks) and in-place combination.
//! Integer arithmetic wraps on overflow in both contraction and combination.

mod element;
mod tensor;

pub use element::Element;
pub use tensor::Tensor;

use alloc::vec::Vec;
use core::num::Wrapping;

use half::f16;
use log::trace;
use ndarray::{ArrayD, LinalgScalar};
use ndarray_einsum_beta::ArrayLike;

use crate::backend::{ContractOptions, ContractionBackend};
use crate::dtype::{Casting, DType, can_cast, promote};
use crate::error::{EinsumError, EinsumResult};
use crate::notation::CombineOp;
use tensor::with_array;

/// Contraction backend for [`Tensor`] on the CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdarrayBackend;

impl NdarrayBackend {
    pub fn new() -> Self {
        Self
    }

    /// Dtype the contraction is computed in.
    fn result_dtype(operands: &[&Tensor], options: &ContractOptions) -> EinsumResult<DType> {
        if let Some(dtype) = options.dtype {
            return Ok(dtype);
        }
        operands
            .iter()
            .map(|t| t.dtype())
            .reduce(promote)
            .ok_or_else(|| EinsumError::contraction("at least one operand is required"))
    }
}

impl ContractionBackend for NdarrayBackend {
    type Tensor = Tensor;

    fn contract(
        &self,
        subscripts: &str,
        operands: &[&Tensor],
        options: &ContractOptions,
    ) -> EinsumResult<Tensor> {
        let dtype = Self::result_dtype(operands, options)?;
        for operand in operands {
            if !can_cast(operand.dtype(), dtype, options.casting) {
                return Err(EinsumError::CastingViolation {
                    from: operand.dtype(),
                    to: dtype,
                    casting: options.casting,
                });
            }
        }

        trace!("Contracting '{}' in {}", subscripts, dtype);
        match dtype {
            DType::F16 => contract_as::<f16>(subscripts, operands),
            DType::F32 => contract_as::<f32>(subscripts, operands),
            DType::F64 => contract_as::<f64>(subscripts, operands),
            DType::I32 => contract_wrapping::<i32>(subscripts, operands),
            DType::I64 => contract_wrapping::<i64>(subscripts, operands),
        }
    }

    fn contract_into(
        &self,
        subscripts: &str,
        operands: &[&Tensor],
        out: &mut Tensor,
        options: &ContractOptions,
    ) -> EinsumResult<()> {
        let result = self.contract(subscripts, operands, options)?;

        if result.shape() != out.shape() {
            return Err(EinsumError::shape_mismatch(out.shape(), result.shape()));
        }
        if !can_cast(result.dtype(), out.dtype(), options.casting) {
            return Err(EinsumError::CastingViolation {
                from: result.dtype(),
                to: out.dtype(),
                casting: options.casting,
            });
        }

        out.assign_from(&result);
        Ok(())
    }

    fn shape<'t>(&self, tensor: &'t Tensor) -> &'t [usize] {
        tensor.shape()
    }

    fn combine(
        &self,
        acc: &mut Tensor,
        rhs: &Tensor,
        op: CombineOp,
        casting: Casting,
    ) -> EinsumResult<()> {
        if acc.shape() != rhs.shape() {
            return Err(EinsumError::shape_mismatch(acc.shape(), rhs.shape()));
        }

        let promoted = promote(acc.dtype(), rhs.dtype());
        if !can_cast(promoted, acc.dtype(), casting) {
            return Err(EinsumError::CastingViolation {
                from: promoted,
                to: acc.dtype(),
                casting,
            });
        }

        trace!("Combining {} into {} accumulator", rhs.dtype(), acc.dtype());
        if promoted == acc.dtype() {
            with_array!(acc, a => combine_elements(a, rhs, op));
        } else {
            // Compute in the wider dtype, then store back
            let mut wide = acc.cast_unchecked(promoted);
            with_array!(&mut wide, a => combine_elements(a, rhs, op));
            acc.assign_from(&wide);
        }
        Ok(())
    }
}

fn contract_as<E: Element>(subscripts: &str, operands: &[&Tensor]) -> EinsumResult<Tensor> {
    let arrays: Vec<_> = operands.iter().map(|t| t.elements_as::<E>()).collect();
    let views: Vec<&dyn ArrayLike<E>> = arrays
        .iter()
        .map(|a| &**a as &dyn ArrayLike<E>)
        .collect();

    ndarray_einsum_beta::einsum(subscripts, &views)
        .map(E::wrap)
        .map_err(EinsumError::contraction)
}

/// Contracts integers as [`Wrapping`] so overflow wraps instead of panicking.
fn contract_wrapping<E>(subscripts: &str, operands: &[&Tensor]) -> EinsumResult<Tensor>
where
    E: Element,
    Wrapping<E>: LinalgScalar,
{
    let arrays: Vec<ArrayD<Wrapping<E>>> = operands
        .iter()
        .map(|t| t.elements_as::<E>().mapv(Wrapping))
        .collect();
    let views: Vec<&dyn ArrayLike<Wrapping<E>>> = arrays
        .iter()
        .map(|a| a as &dyn ArrayLike<Wrapping<E>>)
        .collect();

    ndarray_einsum_beta::einsum(subscripts, &views)
        .map(|result| E::wrap(result.mapv(|w| w.0)))
        .map_err(EinsumError::contraction)
}

fn combine_elements<E: Element>(acc: &mut ArrayD<E>, rhs: &Tensor, op: CombineOp) {
    let rhs = rhs.elements_as::<E>();
    acc.zip_mut_with(&*rhs, |a, &b| *a = a.apply(b, op));
}
