//! Integration test suite for einsum-elementwise.

mod chain_tests;
mod integration_tests;
