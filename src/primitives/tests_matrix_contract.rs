// =========================================================================
// FALSIFY-MM: Matrix multiplication contract (medir primitives)
//
// The naive kernel is the benchmarked subject, so its algebra must hold
// bit-for-bit across runs: shape law, constant-fill law, identity law,
// reproducibility law.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MM-001: Matmul shape: (n×p) * (p×m) = (n×m)
#[test]
fn falsify_mm_001_matmul_shape() {
    let a = Matrix::filled(2, 3, 1.0).expect("valid");
    let b = Matrix::filled(3, 4, 1.0).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MM-001: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MM-002: Constant-fill law: fill(a) * fill(b) has every cell a·b·n
#[test]
fn falsify_mm_002_constant_fill() {
    for n in 1..=8 {
        let a = Matrix::filled(n, n, 1.5).expect("valid");
        let b = Matrix::filled(n, n, 2.5).expect("valid");
        let c = a.matmul(&b).expect("compatible dims");
        let expected = 1.5 * 2.5 * n as f64;
        for i in 0..n {
            for j in 0..n {
                assert_eq!(
                    c.get(i, j),
                    expected,
                    "FALSIFIED MM-002: C[{i},{j}] != a*b*n for n={n}"
                );
            }
        }
    }
}

/// FALSIFY-MM-003: Identity law: A * I = A
#[test]
fn falsify_mm_003_identity() {
    let data: Vec<f64> = (0..25).map(|i| (f64::from(i) * 0.61).cos() * 4.0).collect();
    let a = Matrix::from_vec(5, 5, data).expect("valid");
    let c = a.matmul(&Matrix::eye(5)).expect("compatible dims");

    for i in 0..5 {
        for j in 0..5 {
            assert!(
                (c.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MM-003: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                c.get(i, j),
                a.get(i, j)
            );
        }
    }
}

mod matmul_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MM-001-prop: Shape law for random rectangular operands
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mm_001_prop_shape(
            n in 1..=8usize,
            p in 1..=8usize,
            m in 1..=8usize,
            seed in 0..500u32,
        ) {
            let make = |len: usize| -> Vec<f64> {
                (0..len)
                    .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                    .collect()
            };
            let a = Matrix::from_vec(n, p, make(n * p)).expect("valid");
            let b = Matrix::from_vec(p, m, make(p * m)).expect("valid");
            let c = a.matmul(&b).expect("compatible dims");

            prop_assert_eq!(c.shape(), (n, m));
        }

        /// FALSIFY-MM-004-prop: Left-to-right summation is reproducible bit-for-bit
        #[test]
        fn falsify_mm_004_prop_reproducible(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let make = |salt: f64| -> Vec<f64> {
                (0..n * n)
                    .map(|i| ((i as f64 + f64::from(seed)) * salt).sin() * 10.0)
                    .collect()
            };
            let a = Matrix::from_vec(n, n, make(0.37)).expect("valid");
            let b = Matrix::from_vec(n, n, make(0.73)).expect("valid");

            let c1 = a.matmul(&b).expect("compatible dims");
            let c2 = a.matmul(&b).expect("compatible dims");
            for (x, y) in c1.as_slice().iter().zip(c2.as_slice()) {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }

        /// FALSIFY-MM-005-prop: Constant-fill matches the kernel's own
        /// left-to-right accumulation of identical terms
        #[test]
        fn falsify_mm_005_prop_constant_fill_accumulation(
            n in 1..=16usize,
            a_fill in -4.0..4.0f64,
            b_fill in -4.0..4.0f64,
        ) {
            let a = Matrix::filled(n, n, a_fill).expect("valid");
            let b = Matrix::filled(n, n, b_fill).expect("valid");
            let c = a.matmul(&b).expect("compatible dims");

            // Same summation order as the kernel: n identical terms,
            // accumulated left to right.
            let mut expected = 0.0;
            for _ in 0..n {
                expected += a_fill * b_fill;
            }
            for &cell in c.as_slice() {
                prop_assert_eq!(cell.to_bits(), expected.to_bits());
            }
        }
    }
}
