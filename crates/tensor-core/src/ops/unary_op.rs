// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! In-place elementwise unary operations.

use crate::{TensorError, TensorViewMut};

/// Rewrites every element of `tensor` in place as `f(old)`.
///
/// No allocation and no shape change. The buffer is treated as flat, so the
/// tensor must be contiguous.
///
/// # Errors
/// Returns [`TensorError::NonContiguous`] if the strides are not row-major.
///
/// # Examples
/// ```
/// use tensor_core::{apply_unary, Shape, Tensor};
/// let mut t = Tensor::from_f32(Shape::vector(3), &[1.0, 2.0, 3.0]).unwrap();
/// apply_unary(&mut t.view_mut(), |x| x * 10.0).unwrap();
/// assert_eq!(t.as_f32_slice(), &[10.0, 20.0, 30.0]);
/// ```
pub fn apply_unary<F>(tensor: &mut TensorViewMut<'_>, f: F) -> Result<(), TensorError>
where
    F: Fn(f32) -> f32,
{
    apply_named("apply_unary", tensor, f)
}

fn apply_named<F>(op: &'static str, tensor: &mut TensorViewMut<'_>, f: F) -> Result<(), TensorError>
where
    F: Fn(f32) -> f32,
{
    tensor.layout().ensure_contiguous(op)?;
    for x in tensor.as_f32_slice_mut() {
        *x = f(*x);
    }
    Ok(())
}

/// Negates every element in place.
pub fn neg(tensor: &mut TensorViewMut<'_>) -> Result<(), TensorError> {
    apply_named("neg", tensor, |x| -x)
}

/// Replaces every element with its base-2 logarithm.
pub fn log2(tensor: &mut TensorViewMut<'_>) -> Result<(), TensorError> {
    apply_named("log2", tensor, f32::log2)
}

/// Replaces every element `x` with `2^x`.
pub fn exp2(tensor: &mut TensorViewMut<'_>) -> Result<(), TensorError> {
    apply_named("exp2", tensor, f32::exp2)
}

/// Replaces every element with its sine.
pub fn sin(tensor: &mut TensorViewMut<'_>) -> Result<(), TensorError> {
    apply_named("sin", tensor, f32::sin)
}

/// Replaces every element with its square root.
pub fn sqrt(tensor: &mut TensorViewMut<'_>) -> Result<(), TensorError> {
    apply_named("sqrt", tensor, f32::sqrt)
}
