// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operation.

use crate::{Shape, Tensor, TensorError, TensorView};

/// Performs matrix multiplication and returns a new tensor: `lhs @ rhs`.
///
/// Both inputs must be 2-D tensors with compatible inner dimensions:
/// `lhs` is `[M, N]`, `rhs` is `[N, P]`, and the result is `[M, P]`.
///
/// # Errors
/// - [`TensorError::ShapeMismatch`] if either input is not 2-D or the inner
///   dimensions differ.
/// - [`TensorError::NonContiguous`] if either input is not contiguous.
/// - [`TensorError::Allocation`] if the output cannot be allocated.
///
/// # Examples
/// ```
/// use tensor_core::{matmul, Shape, Tensor};
/// let a = Tensor::from_f32(Shape::matrix(1, 2), &[1.0, 2.0]).unwrap();
/// let b = Tensor::from_f32(Shape::matrix(2, 1), &[3.0, 4.0]).unwrap();
/// let c = matmul(&a.view(), &b.view()).unwrap();
/// assert_eq!(c.as_f32_slice(), &[11.0]);
/// ```
pub fn matmul(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    let (m, _, p) = validate_operands(lhs, rhs)?;
    let mut output = Tensor::zeros(Shape::matrix(m, p))?;
    matmul_into(lhs, rhs, &mut output)?;
    Ok(output)
}

/// Performs matrix multiplication into a pre-allocated `output`.
///
/// `output` must be exactly `[M, P]` and contiguous. Every element is
/// overwritten; the previous contents are ignored.
///
/// # Errors
/// Same as [`matmul`], plus [`TensorError::ShapeMismatch`] or
/// [`TensorError::NonContiguous`] for an unsuitable `output`.
pub fn matmul_into(
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), TensorError> {
    let (m, n, p) = validate_operands(lhs, rhs)?;

    let expected_shape = Shape::matrix(m, p);
    if output.shape() != &expected_shape {
        return Err(TensorError::ShapeMismatch {
            op: "matmul (output)",
            lhs: expected_shape,
            rhs: output.shape().clone(),
        });
    }
    output.layout().ensure_contiguous("matmul (output)")?;

    let a = lhs.as_f32_slice();
    let b = rhs.as_f32_slice();
    let c = output.as_f32_slice_mut();

    matmul_f32_naive(a, b, c, m, n, p);

    Ok(())
}

/// Checks ranks, inner dimensions, and contiguity; returns `(m, n, p)`.
fn validate_operands(
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
) -> Result<(usize, usize, usize), TensorError> {
    if !lhs.shape().is_matmul_compatible(rhs.shape()) {
        return Err(TensorError::ShapeMismatch {
            op: "matmul",
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }
    lhs.layout().ensure_contiguous("matmul")?;
    rhs.layout().ensure_contiguous("matmul")?;

    let lhs_dims = lhs.shape().dims();
    let rhs_dims = rhs.shape().dims();
    Ok((lhs_dims[0], lhs_dims[1], rhs_dims[1]))
}

/// Reference f32 matrix multiplication.
///
/// Canonical ijk loop order with a single f32 accumulator per output element,
/// summed in increasing `k`. Any faster kernel must reproduce this result
/// within floating-point tolerance.
fn matmul_f32_naive(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, p: usize) {
    for i in 0..m {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..p {
            let mut sum = 0.0f32;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b[k * p + j];
            }
            c[i * p + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_2x3_times_3x2() {
        // A = [[1, 2, 3], [4, 5, 6]]
        // B = [[7, 8], [9, 10], [11, 12]]
        // C = [[58, 64], [139, 154]]
        let a = Tensor::from_f32(Shape::matrix(2, 3), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b =
            Tensor::from_f32(Shape::matrix(3, 2), &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

        let c = matmul(&a.view(), &b.view()).unwrap();

        assert_eq!(c.shape(), &Shape::matrix(2, 2));
        assert!(c.is_contiguous());
        assert_eq!(c.as_f32_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_identity() {
        // A * I = A
        let a = Tensor::from_f32(Shape::matrix(2, 2), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let eye = Tensor::from_f32(Shape::matrix(2, 2), &[1.0, 0.0, 0.0, 1.0]).unwrap();

        let c = matmul(&a.view(), &eye.view()).unwrap();

        assert_eq!(c.as_f32_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        let b = Tensor::zeros(Shape::matrix(4, 2)).unwrap(); // 4 != 3

        let err = matmul(&a.view(), &b.view()).unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                op: "matmul",
                lhs: Shape::matrix(2, 3),
                rhs: Shape::matrix(4, 2),
            }
        );
    }

    #[test]
    fn test_matmul_rejects_non_matrix() {
        let a = Tensor::zeros(Shape::vector(3)).unwrap();
        let b = Tensor::zeros(Shape::matrix(3, 2)).unwrap();
        assert!(matches!(
            matmul(&a.view(), &b.view()),
            Err(TensorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_matmul_1x1() {
        let a = Tensor::from_f32(Shape::matrix(1, 1), &[3.0]).unwrap();
        let b = Tensor::from_f32(Shape::matrix(1, 1), &[4.0]).unwrap();

        let c = matmul(&a.view(), &b.view()).unwrap();
        assert_eq!(c.as_f32_slice(), &[12.0]);
    }

    #[test]
    fn test_matmul_empty_inner_dim() {
        let a = Tensor::zeros(Shape::matrix(2, 0)).unwrap();
        let b = Tensor::zeros(Shape::matrix(0, 3)).unwrap();
        let c = matmul(&a.view(), &b.view()).unwrap();
        assert_eq!(c.shape(), &Shape::matrix(2, 3));
        assert!(c.as_f32_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_matmul_non_contiguous() {
        let mut a = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        let b = Tensor::zeros(Shape::matrix(3, 2)).unwrap();
        a.strides_mut()[1] = 2;
        let err = matmul(&a.view(), &b.view()).unwrap_err();
        assert!(matches!(err, TensorError::NonContiguous { op: "matmul", .. }));
    }

    #[test]
    fn test_matmul_into_overwrites_output() {
        let a = Tensor::from_f32(Shape::matrix(2, 2), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Tensor::from_f32(Shape::matrix(2, 2), &[5.0, 6.0, 7.0, 8.0]).unwrap();
        let mut c = Tensor::zeros(Shape::matrix(2, 2)).unwrap();
        c.fill(f32::NAN);

        matmul_into(&a.view(), &b.view(), &mut c).unwrap();
        assert_eq!(c.as_f32_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_into_bad_output() {
        let a = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        let b = Tensor::zeros(Shape::matrix(3, 4)).unwrap();

        let mut wrong = Tensor::zeros(Shape::matrix(4, 2)).unwrap();
        assert!(matches!(
            matmul_into(&a.view(), &b.view(), &mut wrong),
            Err(TensorError::ShapeMismatch {
                op: "matmul (output)",
                ..
            })
        ));

        let mut corrupted = Tensor::zeros(Shape::matrix(2, 4)).unwrap();
        corrupted.strides_mut()[0] = 1;
        assert!(matches!(
            matmul_into(&a.view(), &b.view(), &mut corrupted),
            Err(TensorError::NonContiguous { .. })
        ));
    }

    #[test]
    fn test_accumulation_order() {
        // Values chosen so that summation order changes the f32 result:
        // (1e8 + 1) - 1e8 == 0 in f32, but 1e8 - 1e8 + 1 == 1.
        let a = Tensor::from_f32(Shape::matrix(1, 3), &[1e8, 1.0, -1e8]).unwrap();
        let b = Tensor::from_f32(Shape::matrix(3, 1), &[1.0, 1.0, 1.0]).unwrap();
        let c = matmul(&a.view(), &b.view()).unwrap();

        let mut expected = 0.0f32;
        for x in [1e8f32, 1.0, -1e8] {
            expected += x;
        }
        assert_eq!(c.as_f32_slice()[0], expected);
        assert_eq!(expected, 0.0);
    }
}
