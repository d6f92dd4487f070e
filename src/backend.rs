//! The contraction primitive consumed by the evaluator.
//!
//! Any dense tensor library can drive elementwise einsum by implementing
//! [`ContractionBackend`]. The evaluator never inspects tensor contents; it only
//! contracts, compares shapes and combines.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::dtype::{Casting, DType};
use crate::error::{EinsumError, EinsumResult};
use crate::notation::CombineOp;

/// Options forwarded unchanged to every contraction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractOptions {
    /// Casting rule for operand and output conversions.
    pub casting: Casting,
    /// Requested result dtype. `None` uses the promoted operand dtype.
    pub dtype: Option<DType>,
}

/// A dense tensor contraction engine.
pub trait ContractionBackend {
    /// Tensor type operated on by this backend.
    type Tensor;

    /// Contracts `operands` according to a single einsum expression and
    /// allocates the result.
    fn contract(
        &self,
        subscripts: &str,
        operands: &[&Self::Tensor],
        options: &ContractOptions,
    ) -> EinsumResult<Self::Tensor>;

    /// Contracts `operands` and writes the result into `out`.
    fn contract_into(
        &self,
        subscripts: &str,
        operands: &[&Self::Tensor],
        out: &mut Self::Tensor,
        options: &ContractOptions,
    ) -> EinsumResult<()>;

    /// Contracts using explicit integer labels, one list per operand.
    ///
    /// The default relabels the integers to letters in first-seen order and
    /// forwards the resulting string to [`ContractionBackend::contract`].
    fn contract_sublists(
        &self,
        inputs: &[Vec<usize>],
        output: Option<&[usize]>,
        operands: &[&Self::Tensor],
        options: &ContractOptions,
    ) -> EinsumResult<Self::Tensor> {
        let subscripts = sublists_to_subscripts(inputs, output)?;
        self.contract(&subscripts, operands, options)
    }

    /// Like [`ContractionBackend::contract_sublists`], writing into `out`.
    fn contract_sublists_into(
        &self,
        inputs: &[Vec<usize>],
        output: Option<&[usize]>,
        operands: &[&Self::Tensor],
        out: &mut Self::Tensor,
        options: &ContractOptions,
    ) -> EinsumResult<()> {
        let subscripts = sublists_to_subscripts(inputs, output)?;
        self.contract_into(&subscripts, operands, out, options)
    }

    /// Returns the shape of a tensor.
    fn shape<'t>(&self, tensor: &'t Self::Tensor) -> &'t [usize];

    /// Combines `rhs` into `acc` in place. Both tensors have the same shape.
    fn combine(
        &self,
        acc: &mut Self::Tensor,
        rhs: &Self::Tensor,
        op: CombineOp,
        casting: Casting,
    ) -> EinsumResult<()>;
}

const LABELS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts explicit sublists to einsum string notation.
///
/// ```
/// use einsum_elementwise::backend::sublists_to_subscripts;
///
/// let s = sublists_to_subscripts(&[vec![7, 3], vec![3, 9]], Some(&[7, 9][..])).unwrap();
/// assert_eq!(s, "ab,bc->ac");
/// ```
pub fn sublists_to_subscripts(
    inputs: &[Vec<usize>],
    output: Option<&[usize]>,
) -> EinsumResult<String> {
    if inputs.is_empty() {
        return Err(EinsumError::sublist("at least one input sublist is required"));
    }

    let mut letters: HashMap<usize, char> = HashMap::new();
    let mut subscripts = String::new();

    for (i, sublist) in inputs.iter().enumerate() {
        if i > 0 {
            subscripts.push(',');
        }
        for &label in sublist {
            subscripts.push(letter_for(&mut letters, label)?);
        }
    }

    if let Some(output) = output {
        subscripts.push_str("->");
        for label in output {
            let c = letters.get(label).copied().ok_or_else(|| {
                EinsumError::sublist(alloc::format!(
                    "output label {} does not appear in any input",
                    label
                ))
            })?;
            subscripts.push(c);
        }
    }

    Ok(subscripts)
}

fn letter_for(letters: &mut HashMap<usize, char>, label: usize) -> EinsumResult<char> {
    if let Some(&c) = letters.get(&label) {
        return Ok(c);
    }
    let next = LABELS
        .get(letters.len())
        .map(|&b| b as char)
        .ok_or_else(|| EinsumError::sublist("more than 52 distinct labels"))?;
    letters.insert(label, next);
    Ok(next)
}
