//! Integration tests for einsum-elementwise.
//!
//! These tests execute elementwise einsum on the ndarray backend.

use einsum_elementwise::cpu::{NdarrayBackend, Tensor};
use einsum_elementwise::{
    Casting, ContractOptions, ContractionBackend, DType, EinsumConfig, EinsumError, einsum,
    einsum_into,
};
use ndarray::{Array2, array};
use pretty_assertions::assert_eq;

fn matrix(rows: usize, cols: usize, offset: f64) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| offset + (i * cols + j) as f64)
}

#[test]
fn test_plain_matches_backend() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(matrix(2, 3, 1.0));
    let b = Tensor::from(matrix(3, 4, -2.0));

    let direct = backend
        .contract("ij,jk->ik", &[&a, &b], &ContractOptions::default())
        .unwrap();
    let result = einsum(&backend, "ij,jk->ik", &[&a, &b], None).unwrap();

    assert_eq!(result, direct);
}

#[test]
fn test_identity_sum() {
    let backend = NdarrayBackend::new();
    let a = matrix(2, 3, 0.0);
    let b = matrix(2, 3, 10.0);

    let result = einsum(
        &backend,
        "ij->ij+ij->ij",
        &[&Tensor::from(a.clone()), &Tensor::from(b.clone())],
        None,
    )
    .unwrap();

    assert_eq!(result, Tensor::from(&a + &b));
}

#[test]
fn test_sum_of_matmuls() {
    let backend = NdarrayBackend::new();
    let a = matrix(2, 3, 1.0);
    let b = matrix(3, 2, 2.0);
    let c = matrix(2, 4, -1.0);
    let d = matrix(4, 2, 0.5);

    let operands = [
        Tensor::from(a.clone()),
        Tensor::from(b.clone()),
        Tensor::from(c.clone()),
        Tensor::from(d.clone()),
    ];
    let refs: Vec<&Tensor> = operands.iter().collect();

    let result = einsum(&backend, "ij,jk->ik+ij,jk->ik", &refs, None).unwrap();

    assert_eq!(result, Tensor::from(a.dot(&b) + c.dot(&d)));
}

#[test]
fn test_commutator() {
    let backend = NdarrayBackend::new();
    let a = array![[1.0f64, 2.0], [3.0, 4.0]];
    let b = array![[0.0f64, 1.0], [1.0, 0.0]];
    let (ta, tb) = (Tensor::from(a.clone()), Tensor::from(b.clone()));

    let result = einsum(&backend, "ij,jk->ik-ij,jk->ik", &[&ta, &tb, &tb, &ta], None).unwrap();

    assert_eq!(result, Tensor::from(a.dot(&b) - b.dot(&a)));
}

#[test]
fn test_reduction_segments() {
    let backend = NdarrayBackend::new();
    let m = array![[1.0f64, 2.0], [3.0, 4.0]];
    let v = array![10.0f64, 20.0];

    let result = einsum(
        &backend,
        "ij->i+j->j",
        &[&Tensor::from(m), &Tensor::from(v)],
        None,
    )
    .unwrap();

    assert_eq!(result, Tensor::from(array![13.0f64, 27.0]));
}

#[test]
fn test_chain_is_left_to_right() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(array![10.0f64, 10.0]);
    let b = Tensor::from(array![3.0f64, 1.0]);
    let c = Tensor::from(array![2.0f64, 5.0]);

    let result = einsum(&backend, "i->i-i->i+i->i", &[&a, &b, &c], None).unwrap();

    assert_eq!(result, Tensor::from(array![9.0f64, 14.0]));
}

#[test]
fn test_shape_mismatch() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(matrix(2, 3, 0.0));
    let b = Tensor::from(matrix(2, 3, 1.0));

    let err = einsum(&backend, "ij->ij+ij->ji", &[&a, &b], None).unwrap_err();

    assert_eq!(
        err,
        EinsumError::ShapeMismatch {
            expected: vec![2, 3],
            got: vec![3, 2],
        }
    );
}

#[test]
fn test_malformed_subscripts() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(matrix(2, 2, 0.0));

    for subscripts in ["ij,jk->ik+", "+ij->ij", "ij--kl"] {
        let err = einsum(&backend, subscripts, &[&a, &a], None).unwrap_err();
        assert!(matches!(err, EinsumError::MalformedSubscripts { .. }));
    }
}

#[test]
fn test_output_buffer() {
    let backend = NdarrayBackend::new();
    let a = matrix(2, 3, 1.0);
    let b = matrix(2, 3, 5.0);
    let mut out = Tensor::zeros(&[2, 3], DType::F64);
    let out_ptr: *const Tensor = &out;

    let result = einsum_into(
        &backend,
        "ij->ij-ij->ij",
        &[&Tensor::from(a.clone()), &Tensor::from(b.clone())],
        &mut out,
        None,
    )
    .unwrap();

    assert!(std::ptr::eq(result, out_ptr));
    assert_eq!(out, Tensor::from(&a - &b));
}

#[test]
fn test_output_buffer_shape_checked_by_backend() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(matrix(2, 3, 1.0));
    let mut out = Tensor::zeros(&[3, 2], DType::F64);

    let err = einsum_into(&backend, "ij->ij+ij->ij", &[&a, &a], &mut out, None).unwrap_err();

    assert!(matches!(err, EinsumError::ShapeMismatch { .. }));
}

#[test]
fn test_combination_casting_is_safe_by_default() {
    let backend = NdarrayBackend::new();
    let ints = Tensor::from(array![1i64, 2]);
    let floats = Tensor::from(array![0.5f64, 0.5]);

    let err = einsum(&backend, "i->i+i->i", &[&ints, &floats], None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::CastingViolation {
            from: DType::F64,
            to: DType::I64,
            casting: Casting::Safe,
        }
    );

    let result = einsum(
        &backend,
        "i->i+i->i",
        &[&ints, &floats],
        Some(EinsumConfig::unsafe_casting()),
    )
    .unwrap();
    assert_eq!(result, Tensor::from(array![1i64, 2]));
}

#[test]
fn test_float_accumulator_accepts_int_segment() {
    let backend = NdarrayBackend::new();
    let floats = Tensor::from(array![0.5f64, 0.5]);
    let ints = Tensor::from(array![1i32, 2]);

    let result = einsum(&backend, "i->i+i->i", &[&floats, &ints], None).unwrap();

    assert_eq!(result, Tensor::from(array![1.5f64, 2.5]));
}

#[test]
fn test_requested_dtype_applies_to_each_segment() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(array![1.0f32, 2.0]);
    let b = Tensor::from(array![3.0f32, 4.0]);
    let config = EinsumConfig::new().with_dtype(DType::F64);

    let result = einsum(&backend, "i->i+i->i", &[&a, &b], Some(config)).unwrap();

    assert_eq!(result, Tensor::from(array![4.0f64, 6.0]));
}

#[test]
fn test_integer_tensors() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(array![[1i64, 2], [3, 4]]);
    let b = Tensor::from(array![[1i64, 0], [0, 1]]);

    let result = einsum(&backend, "ij,jk->ik-ji->ij", &[&a, &b, &a], None).unwrap();

    assert_eq!(result, Tensor::from(array![[0i64, -1], [1, 0]]));
}

#[test]
fn test_integer_overflow_wraps_in_contraction_and_combination() {
    let backend = NdarrayBackend::new();
    let a = Tensor::from(array![i32::MAX, 1]);
    let b = Tensor::from(array![2i32, 1]);

    let product = einsum(&backend, "i,i->i", &[&a, &b], None).unwrap();
    assert_eq!(product, Tensor::from(array![-2i32, 1]));

    let sum = einsum(&backend, "i->i+i->i", &[&a, &b], None).unwrap();
    assert_eq!(sum, Tensor::from(array![i32::MIN + 1, 2]));
}
