// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise binary operations producing a new tensor.

use crate::{Tensor, TensorError, TensorView};

/// Combines two same-shaped tensors element by element: `out[i] = op(lhs[i], rhs[i])`.
///
/// There is no broadcasting: ranks and every dimension must match. Both
/// operands are read as flat row-major buffers, so both must be contiguous.
/// The result is a freshly allocated tensor with `lhs`'s shape.
///
/// # Errors
/// - [`TensorError::ShapeMismatch`] if the shapes differ (checked first, before
///   any data is read).
/// - [`TensorError::NonContiguous`] if either operand is not contiguous.
/// - [`TensorError::Allocation`] if the output cannot be allocated.
pub fn apply_binary<F>(
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
    op: F,
) -> Result<Tensor, TensorError>
where
    F: Fn(f32, f32) -> f32,
{
    apply_named("apply_binary", lhs, rhs, op)
}

fn apply_named<F>(
    name: &'static str,
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
    op: F,
) -> Result<Tensor, TensorError>
where
    F: Fn(f32, f32) -> f32,
{
    if lhs.shape() != rhs.shape() {
        return Err(TensorError::ShapeMismatch {
            op: name,
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }
    lhs.layout().ensure_contiguous(name)?;
    rhs.layout().ensure_contiguous(name)?;

    let mut output = Tensor::zeros(lhs.shape().clone())?;
    let a = lhs.as_f32_slice();
    let b = rhs.as_f32_slice();
    for ((d, &x), &y) in output.as_f32_slice_mut().iter_mut().zip(a).zip(b) {
        *d = op(x, y);
    }
    Ok(output)
}

/// Elementwise sum.
///
/// # Examples
/// ```
/// use tensor_core::{add, Shape, Tensor};
/// let a = Tensor::from_f32(Shape::vector(2), &[1.0, 2.0]).unwrap();
/// let b = Tensor::from_f32(Shape::vector(2), &[10.0, 20.0]).unwrap();
/// let c = add(&a.view(), &b.view()).unwrap();
/// assert_eq!(c.as_f32_slice(), &[11.0, 22.0]);
/// ```
pub fn add(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    apply_named("add", lhs, rhs, |x, y| x + y)
}

/// Elementwise difference `lhs - rhs`.
pub fn sub(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    apply_named("sub", lhs, rhs, |x, y| x - y)
}

/// Elementwise (Hadamard) product. This is not an inner product: no
/// reduction takes place.
pub fn mul(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    apply_named("mul", lhs, rhs, |x, y| x * y)
}

/// Elementwise quotient `lhs / rhs`. Division by zero follows IEEE 754 and
/// yields infinities or NaN.
pub fn div(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    apply_named("div", lhs, rhs, |x, y| x / y)
}
