//! Elementwise einsum execution engine.
//!
//! Parses the subscripts, partitions the operands between segments and folds
//! the segment results into a single accumulator.

use log::{debug, trace};

use crate::backend::{ContractOptions, ContractionBackend};
use crate::error::{EinsumError, EinsumResult};
use crate::notation::{ElementwiseExpression, parse_elementwise};
use super::config::EinsumConfig;
use super::subscripts::Subscripts;

/// Executes an elementwise einsum operation and returns a new tensor.
///
/// # Arguments
/// * `backend` - The contraction primitive
/// * `subscripts` - Subscripts, e.g. `"ij,jk->ik+ik"`
/// * `operands` - All input tensors, in segment order
/// * `config` - Optional configuration
///
/// # Example
///
/// ```ignore
/// // matmul plus a bias matrix
/// let y = einsum(&backend, "ij,jk->ik+ik", &[&a, &b, &bias], None)?;
/// ```
pub fn einsum<'s, B: ContractionBackend>(
    backend: &B,
    subscripts: impl Into<Subscripts<'s>>,
    operands: &[&B::Tensor],
    config: Option<EinsumConfig>,
) -> EinsumResult<B::Tensor> {
    let config = config.unwrap_or_default();
    let options = config.contract_options();

    let text = match subscripts.into() {
        Subscripts::Text(text) => text,
        Subscripts::Sublists { inputs, output } => {
            return backend.contract_sublists(&inputs, output.as_deref(), operands, &options);
        }
    };

    let expression = parse_elementwise(text)?;
    check_operand_count(&expression, operands.len(), &config)?;

    let first = expression.first();
    let first_operands = operand_slice(operands, 0, first.operand_count())?;
    trace!("Contracting segment '{}' into new accumulator", first);
    let mut acc = backend.contract(first.as_str(), first_operands, &options)?;

    fold_segments(backend, &expression, operands, &mut acc, &config, &options)?;
    Ok(acc)
}

/// Executes an elementwise einsum operation, writing the result into `out`.
///
/// The first segment is contracted directly into `out`; later segments are
/// contracted into temporaries and folded into it. Returns `out`.
///
/// If an error is returned, the contents of `out` are unspecified.
pub fn einsum_into<'o, 's, B: ContractionBackend>(
    backend: &B,
    subscripts: impl Into<Subscripts<'s>>,
    operands: &[&B::Tensor],
    out: &'o mut B::Tensor,
    config: Option<EinsumConfig>,
) -> EinsumResult<&'o mut B::Tensor> {
    let config = config.unwrap_or_default();
    let options = config.contract_options();

    let text = match subscripts.into() {
        Subscripts::Text(text) => text,
        Subscripts::Sublists { inputs, output } => {
            backend.contract_sublists_into(&inputs, output.as_deref(), operands, out, &options)?;
            return Ok(out);
        }
    };

    let expression = parse_elementwise(text)?;
    check_operand_count(&expression, operands.len(), &config)?;

    let first = expression.first();
    let first_operands = operand_slice(operands, 0, first.operand_count())?;
    trace!("Contracting segment '{}' into output buffer", first);
    backend.contract_into(first.as_str(), first_operands, out, &options)?;

    fold_segments(backend, &expression, operands, out, &config, &options)?;
    Ok(out)
}

/// Folds every segment after the first into `acc`, left to right.
fn fold_segments<B: ContractionBackend>(
    backend: &B,
    expression: &ElementwiseExpression<'_>,
    operands: &[&B::Tensor],
    acc: &mut B::Tensor,
    config: &EinsumConfig,
    options: &ContractOptions,
) -> EinsumResult<()> {
    let mut stop = expression.first().operand_count();

    for (op, segment) in expression.rest() {
        // This segment's operands start where the last segment's stopped
        let start = stop;
        stop += segment.operand_count();

        let segment_operands = operand_slice(operands, start, segment.operand_count())?;
        trace!(
            "Contracting segment '{}' over operands {}..{}",
            segment, start, stop
        );
        let result = backend.contract(segment.as_str(), segment_operands, options)?;

        let expected = backend.shape(acc);
        let got = backend.shape(&result);
        if expected != got {
            return Err(EinsumError::shape_mismatch(expected, got));
        }

        trace!("Applying '{}' with segment '{}'", op, segment);
        backend.combine(acc, &result, *op, config.casting)?;
    }

    Ok(())
}

fn check_operand_count(
    expression: &ElementwiseExpression<'_>,
    supplied: usize,
    config: &EinsumConfig,
) -> EinsumResult<()> {
    let required = expression.operand_count();
    debug!(
        "Elementwise einsum '{}': {} segment(s), {} operand(s) required, {} supplied",
        expression,
        expression.num_segments(),
        required,
        supplied
    );

    if config.check_operand_count && required != supplied {
        return Err(EinsumError::OperandCountMismatch {
            expected: required,
            got: supplied,
        });
    }
    Ok(())
}

fn operand_slice<'a, T>(
    operands: &'a [&'a T],
    start: usize,
    count: usize,
) -> EinsumResult<&'a [&'a T]> {
    operands
        .get(start..start + count)
        .ok_or(EinsumError::OperandCountMismatch {
            expected: start + count,
            got: operands.len(),
        })
}
