//! Integration tests for csrmat
//!
//! End-to-end scenarios over the public API: construction, element access,
//! arithmetic and determinants on the same matrices.

use csrmat::{CsrMatrix, CsrParts, ErrorKind, Invertibility, MatrixSource};

// ============================================================================
// Construction and Access
// ============================================================================

#[test]
fn test_dense_roundtrip_through_get_element() {
    let dense = vec![
        vec![0.0, 1.5, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0],
        vec![-2.0, 0.0, 0.0, 3.25],
    ];
    let csr = CsrMatrix::from_dense(3, 4, &dense).unwrap();

    for (i, row) in dense.iter().enumerate() {
        for (j, &expected) in row.iter().enumerate() {
            assert_eq!(csr.get_element(i + 1, j + 1).unwrap(), expected);
        }
    }
    assert_eq!(csr.to_dense(), dense);
}

#[test]
fn test_large_sparse_matrix() {
    let mut dense = vec![vec![0i64; 100]; 100];
    dense[0][0] = 1;
    dense[50][50] = 2;
    dense[99][99] = 3;

    let csr = CsrMatrix::from_dense(100, 100, &dense).unwrap();
    assert_eq!(csr.nnz(), 3);
    assert_eq!(csr.trace().unwrap(), 6);
    assert_eq!(csr.get_element(1, 1).unwrap(), 1);
    assert_eq!(csr.get_element(51, 51).unwrap(), 2);
    assert_eq!(csr.get_element(100, 100).unwrap(), 3);
    assert_eq!(csr.get_element(2, 2).unwrap(), 0);
}

#[test]
fn test_empty_matrix_rejected() {
    let err = CsrMatrix::<f64>::create(0, 0, MatrixSource::Dense(Vec::new())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDimension);
}

#[test]
fn test_inconsistent_dimensions_rejected() {
    let err = CsrMatrix::<i32>::create(2, 2, vec![vec![1, 2], vec![3, 4, 5]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn test_csr_source_matches_dense_source() {
    let from_dense = CsrMatrix::<i32>::create(2, 3, vec![vec![0, 7, 0], vec![8, 0, 9]]).unwrap();
    let from_csr = CsrMatrix::create(
        2,
        3,
        CsrParts {
            values: vec![7, 8, 9],
            col_indices: vec![1, 0, 2],
            row_ptr: vec![0, 1, 3],
        },
    )
    .unwrap();

    assert_eq!(from_dense, from_csr);
    assert_eq!(from_csr.into_parts().row_ptr, vec![0, 1, 3]);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_scenario() {
    let a = CsrMatrix::from_dense(3, 3, &[[1, 0, 0], [0, 2, 0], [0, 0, 3]]).unwrap();
    let b = CsrMatrix::from_dense(3, 3, &[[0, 1, 0], [3, 0, 4], [0, 0, 0]]).unwrap();

    let c = a.add(&b).unwrap();
    assert_eq!(c.values(), &[1, 1, 3, 2, 4, 3]);
    assert_eq!(c.col_indices(), &[0, 1, 0, 1, 2, 2]);
    assert_eq!(c.row_ptr(), &[0, 2, 5, 6]);
    assert_eq!(c, b.add(&a).unwrap());
}

#[test]
fn test_zero_matrix_sum() {
    let a = CsrMatrix::from_dense(2, 2, &[[0, 0], [0, 0]]).unwrap();
    let b = CsrMatrix::from_dense(2, 2, &[[0, 0], [0, 0]]).unwrap();

    let c = a.add(&b).unwrap();
    assert!(c.values().is_empty());
    assert!(c.col_indices().is_empty());
    assert_eq!(c.row_ptr(), &[0, 0, 0]);
}

#[test]
fn test_multiply_scenario() {
    let a = CsrMatrix::from_dense(2, 3, &[[1, 0, 2], [0, 3, 0]]).unwrap();
    let b = CsrMatrix::from_dense(3, 2, &[[0, 1], [4, 0], [5, 0]]).unwrap();

    let c = a.multiply_matrix(&b).unwrap();
    assert_eq!(c.values(), &[10, 1, 12]);
    assert_eq!(c.col_indices(), &[0, 1, 0]);
    assert_eq!(c.row_ptr(), &[0, 2, 3]);

    let square = CsrMatrix::from_dense(2, 2, &[[1, 2], [3, 4]]).unwrap();
    assert_eq!(
        a.multiply_matrix(&square).unwrap_err().kind(),
        ErrorKind::ShapeMismatch
    );
}

#[test]
fn test_scalar_then_add_chain() {
    let a = CsrMatrix::from_dense(2, 2, &[[2.0, 0.0], [0.0, 4.0]]).unwrap();
    let half = a.multiply_scalar(0.5);
    let c = half.add(&half).unwrap();
    assert_eq!(c, a);
}

// ============================================================================
// Determinant and Invertibility
// ============================================================================

#[test]
fn test_determinant_scenarios() {
    let a = CsrMatrix::from_dense(3, 3, &[[1, 2, 3], [0, 4, 5], [1, 0, 6]]).unwrap();
    assert_eq!(a.determinant().unwrap(), 22);
    assert_eq!(a.is_invertible().unwrap(), Invertibility::Yes);

    let singular = CsrMatrix::from_dense(2, 2, &[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(singular.determinant().unwrap(), 0.0);
    assert_eq!(singular.is_invertible().unwrap().to_string(), "no");
}

#[test]
fn test_determinant_of_product() {
    // det(AB) = det(A) det(B)
    let a = CsrMatrix::from_dense(3, 3, &[[2, 0, 1], [1, 3, 0], [0, 1, 1]]).unwrap();
    let b = CsrMatrix::from_dense(3, 3, &[[1, 2, 0], [0, 1, 0], [4, 0, 1]]).unwrap();

    let ab = a.multiply_matrix(&b).unwrap();
    assert_eq!(
        ab.determinant().unwrap(),
        a.determinant().unwrap() * b.determinant().unwrap()
    );
}

#[test]
fn test_determinant_larger_identity() {
    for n in 1..=7 {
        let eye = CsrMatrix::<i64>::identity(n).unwrap();
        assert_eq!(eye.determinant().unwrap(), 1, "identity of order {}", n);
    }
}

#[test]
fn test_determinant_order_six_row_swap() {
    // Upper triangular with diagonal 1..=6 (det 720), first two rows swapped
    let dense = [
        [0, 2, 1, 0, 4, 0],
        [1, 2, 0, 1, 0, 3],
        [0, 0, 3, 0, 1, 2],
        [0, 0, 0, 4, 0, 1],
        [0, 0, 0, 0, 5, 2],
        [0, 0, 0, 0, 0, 6],
    ];
    let csr = CsrMatrix::<i64>::from_dense(6, 6, &dense).unwrap();
    assert_eq!(csr.determinant().unwrap(), -720);
    assert_eq!(csr.is_invertible().unwrap(), Invertibility::Yes);

    let swapped_back = CsrMatrix::<i64>::from_dense(
        6,
        6,
        &[dense[1], dense[0], dense[2], dense[3], dense[4], dense[5]],
    )
    .unwrap();
    assert_eq!(swapped_back.determinant().unwrap(), 720);
}

#[test]
fn test_non_square_operations() {
    let a = CsrMatrix::from_dense(2, 3, &[[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(a.trace().unwrap_err().kind(), ErrorKind::NotSquare);
    assert_eq!(a.determinant().unwrap_err().kind(), ErrorKind::NotSquare);
}
