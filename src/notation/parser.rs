//! Elementwise subscript parser.
//!
//! Splits strings like "ij,jk->ik+ik" into segments joined by operators.

use alloc::vec::Vec;

use super::expression::ElementwiseExpression;
use super::segment::{CombineOp, Segment};
use crate::error::{EinsumError, EinsumResult};

/// An entry of a top-level split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text between operators. May be empty.
    Segment(&'a str),
    /// A top-level `+` or `-`.
    Operator(CombineOp),
}

/// Splits on every `+` or `-` not immediately followed by `>`, keeping the
/// operators as their own entries.
///
/// Adjacent operators, or an operator at either end, produce empty segment
/// entries in the same way a delimiter-preserving split does.
pub fn split_top_level(subscripts: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = subscripts.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let Some(op) = CombineOp::from_char(c) else {
            continue;
        };
        // `->` separates inputs from output
        if matches!(chars.peek(), Some((_, '>'))) {
            continue;
        }
        tokens.push(Token::Segment(&subscripts[start..pos]));
        tokens.push(Token::Operator(op));
        start = pos + c.len_utf8();
    }
    tokens.push(Token::Segment(&subscripts[start..]));

    tokens
}

/// Parses an elementwise einsum subscript string.
///
/// # Grammar
///
/// ```text
/// expression ::= segment (op segment)*
/// op         ::= '+' | '-'            (not followed by '>')
/// segment    ::= einsum notation, e.g. "ij,jk->ik"
/// ```
///
/// # Examples
///
/// ```
/// use einsum_elementwise::notation::parse_elementwise;
///
/// let expr = parse_elementwise("ij,jk->ik-ik").unwrap();
/// assert_eq!(expr.num_segments(), 2);
/// assert_eq!(expr.operand_count(), 3);
/// ```
pub fn parse_elementwise(subscripts: &str) -> EinsumResult<ElementwiseExpression<'_>> {
    if subscripts.is_empty() {
        return Err(EinsumError::malformed(subscripts, "empty subscripts"));
    }
    if starts_with_operator(subscripts) {
        return Err(EinsumError::malformed(
            subscripts,
            "subscripts cannot start with a + or -",
        ));
    }

    let tokens = split_top_level(subscripts);

    if matches!(tokens.last(), Some(Token::Segment("")))
        && matches!(tokens.iter().rev().nth(1), Some(Token::Operator(_)))
    {
        return Err(EinsumError::malformed(
            subscripts,
            "subscripts cannot end with a + or -",
        ));
    }

    if tokens.iter().any(|t| matches!(t, Token::Segment(""))) {
        return Err(EinsumError::malformed(
            subscripts,
            "subscripts cannot have repeated + or -",
        ));
    }

    let mut tokens = tokens.into_iter();
    let first = match tokens.next() {
        Some(Token::Segment(text)) => Segment::new(text),
        _ => return Err(EinsumError::malformed(subscripts, "empty subscripts")),
    };
    let mut expression = ElementwiseExpression::new(first);

    // Tokens alternate strictly from here: operator, segment, operator, ...
    while let Some(token) = tokens.next() {
        match (token, tokens.next()) {
            (Token::Operator(op), Some(Token::Segment(text))) => {
                expression.push(op, Segment::new(text));
            }
            _ => {
                return Err(EinsumError::malformed(
                    subscripts,
                    "subscripts cannot have repeated + or -",
                ));
            }
        }
    }

    Ok(expression)
}

fn starts_with_operator(subscripts: &str) -> bool {
    let mut chars = subscripts.chars();
    matches!(chars.next(), Some('+' | '-')) && chars.next() != Some('>')
}
