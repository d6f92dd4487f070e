//! Accepted subscript calling conventions.

use alloc::vec::Vec;

/// Subscripts as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscripts<'a> {
    /// String notation. `+` and `-` combine segments elementwise.
    Text(&'a str),
    /// Explicit integer labels per operand, with an optional output list.
    ///
    /// Forwarded unmodified to the backend; elementwise combination is not
    /// available in this form.
    Sublists {
        inputs: Vec<Vec<usize>>,
        output: Option<Vec<usize>>,
    },
}

impl<'a> Subscripts<'a> {
    /// Creates explicit sublist subscripts.
    pub fn sublists(inputs: Vec<Vec<usize>>, output: Option<Vec<usize>>) -> Self {
        Subscripts::Sublists { inputs, output }
    }
}

impl<'a> From<&'a str> for Subscripts<'a> {
    fn from(s: &'a str) -> Self {
        Subscripts::Text(s)
    }
}

impl<'a> From<&'a alloc::string::String> for Subscripts<'a> {
    fn from(s: &'a alloc::string::String) -> Self {
        Subscripts::Text(s.as_str())
    }
}
