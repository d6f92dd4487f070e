//! Segments and combination operators of an elementwise subscript.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How a segment result is folded into the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombineOp {
    /// `accumulator + segment`
    Add,
    /// `accumulator - segment`
    Subtract,
}

impl CombineOp {
    /// Parses an operator character.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(CombineOp::Add),
            '-' => Some(CombineOp::Subtract),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            CombineOp::Add => '+',
            CombineOp::Subtract => '-',
        }
    }
}

impl fmt::Display for CombineOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One self-contained contraction expression within a larger subscript.
///
/// For example, in `ij,jk->ik+ik`, the segments are `ij,jk->ik` and `ik`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
    operand_count: usize,
}

impl<'a> Segment<'a> {
    /// Creates a segment, deriving its operand count from the input subscripts.
    pub fn new(text: &'a str) -> Self {
        let mut segment = Self {
            text,
            operand_count: 0,
        };
        // One more operand than commas in the input subscripts
        segment.operand_count = segment.inputs().matches(',').count() + 1;
        segment
    }

    /// Returns the contraction expression passed to the backend.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the number of operands this segment consumes.
    #[inline]
    pub fn operand_count(&self) -> usize {
        self.operand_count
    }

    /// Returns the input subscripts, i.e. everything before `->`.
    pub fn inputs(&self) -> &'a str {
        match self.text.find("->") {
            Some(pos) => &self.text[..pos],
            None => self.text,
        }
    }

    /// Returns the explicit output subscript, if any.
    pub fn output(&self) -> Option<&'a str> {
        self.text.find("->").map(|pos| &self.text[pos + 2..])
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
