//! Tests for longer chains of segments.

use einsum_elementwise::cpu::{NdarrayBackend, Tensor};
use einsum_elementwise::{einsum, parse_elementwise};
use ndarray::{Array2, array};

#[test]
fn test_matrix_polynomial() {
    // A^2 + A - I
    let backend = NdarrayBackend::new();
    let a = array![[1.0f64, 2.0], [0.0, 3.0]];
    let eye = Array2::<f64>::eye(2);
    let (ta, ti) = (Tensor::from(a.clone()), Tensor::from(eye.clone()));

    let result = einsum(
        &backend,
        "ij,jk->ik+ij->ij-ij->ij",
        &[&ta, &ta, &ta, &ti],
        None,
    )
    .unwrap();

    assert_eq!(result, Tensor::from(a.dot(&a) + &a - &eye));
}

#[test]
fn test_three_tensor_segment_in_chain() {
    let backend = NdarrayBackend::new();
    let a = array![[1.0f64, 2.0], [3.0, 4.0]];
    let b = array![[2.0f64, 0.0], [1.0, 1.0]];
    let c = array![[1.0f64, -1.0], [0.0, 2.0]];
    let bias = array![[0.5f64, 0.5], [0.5, 0.5]];

    let operands = [
        Tensor::from(a.clone()),
        Tensor::from(b.clone()),
        Tensor::from(c.clone()),
        Tensor::from(bias.clone()),
    ];
    let refs: Vec<&Tensor> = operands.iter().collect();

    let result = einsum(&backend, "ij,jk,kl->il-il", &refs, None).unwrap();

    assert_eq!(result, Tensor::from(a.dot(&b).dot(&c) - &bias));
}

#[test]
fn test_scalar_segments() {
    // trace(A) + <v, v>
    let backend = NdarrayBackend::new();
    let a = Tensor::from(array![[1.0f64, 9.0], [9.0, 2.0]]);
    let v = Tensor::from(array![3.0f64, 4.0]);

    let result = einsum(&backend, "ii->+i,i->", &[&a, &v, &v], None).unwrap();

    assert_eq!(result.shape(), &[] as &[usize]);
    assert_eq!(result.as_array::<f64>().unwrap().sum(), 28.0);
}

#[test]
fn test_many_segments_count() {
    let expr = parse_elementwise("i->i+i->i+i->i+i->i+i->i+i->i").unwrap();
    assert_eq!(expr.num_segments(), 6);
    assert_eq!(expr.operand_count(), 6);
}

#[test]
fn test_many_segments_evaluate() {
    let backend = NdarrayBackend::new();
    let ones = Tensor::from(array![1i32, 1, 1]);
    let refs = vec![&ones; 6];

    let result = einsum(&backend, "i->i+i->i+i->i+i->i+i->i-i->i", &refs, None).unwrap();

    assert_eq!(result, Tensor::from(array![4i32, 4, 4]));
}
