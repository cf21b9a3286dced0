// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.

use crate::Shape;

/// Errors that can occur during tensor construction, access, and arithmetic.
///
/// Every variant is a local, recoverable condition: no library path panics
/// or returns a placeholder value on bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    /// The data buffer for a tensor could not be reserved.
    #[error("allocation failed: could not reserve {requested_bytes} bytes")]
    Allocation { requested_bytes: usize },

    /// Computing the element count, a stride, or the byte size overflowed.
    #[error("size overflow for dims {dims:?}")]
    Overflow { dims: Vec<usize> },

    /// A tensor must have at least one dimension.
    #[error("tensor shape must have at least one dimension")]
    EmptyShape,

    /// The provided buffer length does not match the element count of the shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Two tensors have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// An index has the wrong rank or exceeds the shape.
    #[error("index {index:?} out of range for shape {shape}")]
    OutOfRange { index: Vec<usize>, shape: Shape },

    /// A flat-buffer operation was invoked on a non-contiguous tensor.
    #[error("{op} requires a contiguous tensor, got shape {shape} with strides {strides:?}")]
    NonContiguous {
        op: &'static str,
        shape: Shape,
        strides: Vec<isize>,
    },
}
