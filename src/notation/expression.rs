//! Parsed elementwise einsum expression.

use core::fmt;

use smallvec::SmallVec;

use super::segment::{CombineOp, Segment};

/// A subscript string split into segments and the operators joining them.
///
/// Always starts with a segment; each further segment is paired with the
/// operator that precedes it. Operators associate strictly left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementwiseExpression<'a> {
    first: Segment<'a>,
    rest: SmallVec<[(CombineOp, Segment<'a>); 4]>,
}

impl<'a> ElementwiseExpression<'a> {
    /// Creates an expression with a single segment.
    pub fn new(first: Segment<'a>) -> Self {
        Self {
            first,
            rest: SmallVec::new(),
        }
    }

    /// Appends a segment combined with `op`.
    pub fn push(&mut self, op: CombineOp, segment: Segment<'a>) {
        self.rest.push((op, segment));
    }

    /// Returns the segment that seeds the accumulator.
    #[inline]
    pub fn first(&self) -> &Segment<'a> {
        &self.first
    }

    /// Returns the segments folded into the accumulator, with their operators.
    #[inline]
    pub fn rest(&self) -> &[(CombineOp, Segment<'a>)] {
        &self.rest
    }

    /// Iterates over all segments in evaluation order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<'a>> + '_ {
        core::iter::once(&self.first).chain(self.rest.iter().map(|(_, s)| s))
    }

    #[inline]
    pub fn num_segments(&self) -> usize {
        1 + self.rest.len()
    }

    /// Total number of operands consumed by all segments.
    pub fn operand_count(&self) -> usize {
        self.segments().map(Segment::operand_count).sum()
    }

    /// Returns true if there is no elementwise combination.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.rest.is_empty()
    }
}

impl fmt::Display for ElementwiseExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, segment) in &self.rest {
            write!(f, "{}{}", op, segment)?;
        }
        Ok(())
    }
}
