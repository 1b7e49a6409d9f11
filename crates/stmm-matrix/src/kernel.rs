use std::fmt::Debug;

/// Trait for matmul kernel implementations.
///
/// A kernel computes `C = A @ B` for square row-major `i32` matrices. Slice
/// lengths are a caller guarantee: each of `a`, `b`, `c` must hold exactly
/// `dim * dim` elements. Lengths are checked in debug builds only; the
/// benchmark contract treats them as invariants, not runtime conditions.
///
/// All arithmetic is wrapping: a sum that exceeds `i32` range wraps in
/// two's complement, matching the fixed-width behavior the reference data
/// was generated against.
pub trait MatmulKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "naive-ijk").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [dim, dim]
    /// - `b`: row-major data of shape [dim, dim]
    /// - `c`: row-major output of shape [dim, dim]; every element is written
    fn matmul(&self, dim: usize, a: &[i32], b: &[i32], c: &mut [i32]);
}

/// Textbook i-j-k triple loop.
///
/// Each output element is the dot product of row i of A and column j of B.
/// The inner loop walks B column-wise with stride `dim`, so this is the slow
/// baseline; it is also the reference compute path the benchmark verifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveKernel;

impl MatmulKernel for NaiveKernel {
    fn name(&self) -> &str {
        "naive-ijk"
    }

    fn matmul(&self, dim: usize, a: &[i32], b: &[i32], c: &mut [i32]) {
        debug_assert_eq!(a.len(), dim * dim);
        debug_assert_eq!(b.len(), dim * dim);
        debug_assert_eq!(c.len(), dim * dim);

        for i in 0..dim {
            for j in 0..dim {
                let mut sum = 0i32;
                for k in 0..dim {
                    sum = sum.wrapping_add(a[i * dim + k].wrapping_mul(b[k * dim + j]));
                }
                c[i * dim + j] = sum;
            }
        }
    }
}

/// i-k-j loop order.
///
/// Zeroes C, then accumulates `a[i][k] * b[k][j]` with the inner loop walking
/// B and C row-wise at unit stride. Algebraically identical to the naive
/// kernel; visits the same (i, j, k) triples in a cache-friendlier order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMajorKernel;

impl MatmulKernel for RowMajorKernel {
    fn name(&self) -> &str {
        "row-major-ikj"
    }

    fn matmul(&self, dim: usize, a: &[i32], b: &[i32], c: &mut [i32]) {
        debug_assert_eq!(a.len(), dim * dim);
        debug_assert_eq!(b.len(), dim * dim);
        debug_assert_eq!(c.len(), dim * dim);

        c.fill(0);
        for i in 0..dim {
            for k in 0..dim {
                let aik = a[i * dim + k];
                for j in 0..dim {
                    c[i * dim + j] =
                        c[i * dim + j].wrapping_add(aik.wrapping_mul(b[k * dim + j]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, dim: usize) -> Vec<i32> {
        (0..dim * dim).map(|_| rng.gen_range(-50..=50)).collect()
    }

    // Independent reference: per-element dot product over i64, truncated.
    fn reference_product(dim: usize, a: &[i32], b: &[i32]) -> Vec<i32> {
        let mut c = vec![0i32; dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                let mut sum = 0i64;
                for k in 0..dim {
                    sum += a[i * dim + k] as i64 * b[k * dim + j] as i64;
                }
                c[i * dim + j] = sum as i32;
            }
        }
        c
    }

    #[test]
    fn test_naive_2x2() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut c = [0; 4];
        NaiveKernel.matmul(2, &a, &b, &mut c);
        assert_eq!(c, [19, 22, 43, 50]);
    }

    #[test]
    fn test_naive_1x1() {
        let mut c = [0];
        NaiveKernel.matmul(1, &[7], &[-3], &mut c);
        assert_eq!(c, [-21]);
    }

    #[test]
    fn test_identity_property() {
        let mut rng = StdRng::seed_from_u64(7);
        for dim in [1, 2, 5, 8, 16] {
            let a = random_matrix(&mut rng, dim);
            let mut ident = vec![0i32; dim * dim];
            for i in 0..dim {
                ident[i * dim + i] = 1;
            }
            let mut c = vec![0i32; dim * dim];
            NaiveKernel.matmul(dim, &a, &ident, &mut c);
            assert_eq!(c, a, "A x I != A for dim {dim}");
        }
    }

    #[test]
    fn test_zero_property() {
        let mut rng = StdRng::seed_from_u64(8);
        let dim = 9;
        let a = random_matrix(&mut rng, dim);
        let zero = vec![0i32; dim * dim];
        let mut c = vec![1i32; dim * dim];
        NaiveKernel.matmul(dim, &a, &zero, &mut c);
        assert_eq!(c, zero);
    }

    #[test]
    fn test_kernels_match_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        for dim in [1, 3, 8, 17, 32] {
            let a = random_matrix(&mut rng, dim);
            let b = random_matrix(&mut rng, dim);
            let expected = reference_product(dim, &a, &b);

            let mut c_naive = vec![0i32; dim * dim];
            NaiveKernel.matmul(dim, &a, &b, &mut c_naive);
            assert_eq!(c_naive, expected, "naive-ijk wrong for dim {dim}");

            let mut c_ikj = vec![1i32; dim * dim];
            RowMajorKernel.matmul(dim, &a, &b, &mut c_ikj);
            assert_eq!(c_ikj, expected, "row-major-ikj wrong for dim {dim}");
        }
    }

    #[test]
    fn test_wrapping_overflow() {
        // (MAX * MAX + MAX * MAX) in wrapping i32 arithmetic.
        let a = [i32::MAX, i32::MAX, 0, 0];
        let b = [i32::MAX, 0, i32::MAX, 0];
        let mut c = [0; 4];
        NaiveKernel.matmul(2, &a, &b, &mut c);

        let prod = i32::MAX.wrapping_mul(i32::MAX);
        assert_eq!(c[0], prod.wrapping_add(prod));

        let mut c_ikj = [0; 4];
        RowMajorKernel.matmul(2, &a, &b, &mut c_ikj);
        assert_eq!(c, c_ikj);
    }

    #[test]
    fn test_zero_dim() {
        let mut c: [i32; 0] = [];
        NaiveKernel.matmul(0, &[], &[], &mut c);
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(NaiveKernel.name(), "naive-ijk");
        assert_eq!(RowMajorKernel.name(), "row-major-ikj");
    }
}
