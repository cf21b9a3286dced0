// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Dense, row-major `f32` tensors and their reference operation kernels.
//!
//! This crate provides:
//! - [`Tensor`]: an owned n-dimensional tensor. Strides are computed once at
//!   construction.
//! - [`TensorView`] / [`TensorViewMut`]: non-owning views over a tensor or
//!   over caller-owned memory.
//! - [`Shape`] and [`Layout`]: dimensions, signed strides, offset translation,
//!   and the contiguity check.
//! - Bounds-checked accessors (`get_1d` … `get_4d`, `set_1d` … `set_4d`).
//! - Elementwise unary ops (in place) and binary ops (new tensor).
//! - Naive 2-D matrix multiplication, the numerical reference for faster kernels.
//!
//! # Design Goals
//! - Every failure is a [`TensorError`]; nothing returns a placeholder value.
//! - Ownership is explicit: a `Tensor` frees its buffer exactly once, and
//!   views never do.
//! - Flat-buffer kernels refuse non-contiguous layouts.
//!
//! # Example
//! ```
//! use tensor_core::{add, matmul, Shape, Tensor};
//!
//! let a = Tensor::from_f32(Shape::matrix(2, 3), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
//! let b = Tensor::from_f32(Shape::matrix(3, 2), &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;
//! let c = matmul(&a.view(), &b.view())?;
//! assert_eq!(c.get_2d(1, 1)?, 154.0);
//!
//! let d = add(&c.view(), &c.view())?;
//! assert_eq!(d.as_f32_slice(), &[116.0, 128.0, 278.0, 308.0]);
//! # Ok::<(), tensor_core::TensorError>(())
//! ```

mod access;
mod display;
mod error;
mod layout;
pub mod ops;
mod shape;
mod tensor;

pub use error::TensorError;
pub use layout::Layout;
pub use ops::{
    add, apply_binary, apply_unary, div, exp2, log2, matmul, matmul_into, mul, neg, sin, sqrt,
    sub,
};
pub use shape::Shape;
pub use tensor::{Tensor, TensorView, TensorViewMut};
