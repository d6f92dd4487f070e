//! Elementwise subscript parsing and representation.
//!
//! Extends einsum notation with top-level `+` and `-`:
//! - Plain: `ij,jk->ik`
//! - Sum of contractions: `ij,jk->ik+ik`
//! - Mixed: `ij->i+j->j-i`

mod expression;
mod parser;
mod segment;

pub use expression::ElementwiseExpression;
pub use parser::{Token, parse_elementwise, split_top_level};
pub use segment::{CombineOp, Segment};
