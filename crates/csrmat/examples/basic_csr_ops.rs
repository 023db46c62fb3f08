//! Basic CSR Matrix Operations Example
//!
//! This example walks through:
//! - Building CSR matrices from dense rows
//! - Element access and trace
//! - Addition, scalar and matrix multiplication
//! - Determinant and invertibility
//!
//! Run with: RUST_LOG=debug cargo run --example basic_csr_ops

use csrmat::CsrMatrix;

fn print_triple(label: &str, m: &CsrMatrix<f64>) {
    println!("   {}", label);
    println!("   Values:       {:?}", m.values());
    println!("   Col_index:    {:?}", m.col_indices());
    println!("   Row_pointers: {:?}\n", m.row_ptr());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== csrmat: Basic Operations Example ===\n");

    // 1. Build two 3x3 matrices
    println!("1. Building A and B from dense rows...");
    let a = CsrMatrix::from_dense(
        3,
        3,
        &[[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]],
    )?;
    let b = CsrMatrix::from_dense(
        3,
        3,
        &[[0.0, 1.0, 0.0], [3.0, 0.0, 4.0], [0.0, 0.0, 0.0]],
    )?;
    println!("   A =\n{}\n", a);
    println!("   B: {} non-zeros, density {:.1}%\n", b.nnz(), b.density() * 100.0);

    // 2. Access
    println!("2. Element access and trace...");
    println!("   A[2, 2] = {}", a.get_element(2, 2)?);
    println!("   A[1, 3] = {}", a.get_element(1, 3)?);
    println!("   trace(A) = {}\n", a.trace()?);

    // 3. Arithmetic
    println!("3. Arithmetic...");
    print_triple("A + B:", &a.add(&b)?);
    print_triple("2.5 * B:", &b.multiply_scalar(2.5));
    print_triple("A * B:", &a.multiply_matrix(&b)?);

    // 4. Determinant
    println!("4. Determinant and invertibility...");
    let c = CsrMatrix::from_dense(
        3,
        3,
        &[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [1.0, 0.0, 6.0]],
    )?;
    println!("   det(C) = {}", c.determinant()?);
    println!("   C invertible: {}", c.is_invertible()?);

    let singular = CsrMatrix::from_dense(2, 2, &[[1.0, 2.0], [2.0, 4.0]])?;
    println!("   det(S) = {}", singular.determinant()?);
    println!("   S invertible: {}", singular.is_invertible()?);

    // 5. Errors surface as values
    println!("\n5. Error handling...");
    let rect = CsrMatrix::from_dense(2, 3, &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    match rect.determinant() {
        Ok(det) => println!("   unexpected determinant {}", det),
        Err(e) => println!("   determinant of 2x3: {}", e),
    }
    if let Err(e) = a.get_element(4, 1) {
        println!("   A[4, 1]: {}", e);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
