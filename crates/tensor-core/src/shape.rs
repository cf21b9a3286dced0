// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

/// Describes the dimensionality of a [`crate::Tensor`].
///
/// Shapes are immutable once created and provide checked arithmetic for
/// element counts and row-major strides. Serialises as a plain array, so a
/// shape reads as `[128, 64]` in TOML or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), Some(24));
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements, or `None` on overflow.
    ///
    /// Any zero dimension yields `Some(0)`.
    pub fn num_elements(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Computes row-major (C-order) strides for this shape.
    ///
    /// `stride[rank - 1] = 1` and `stride[i] = stride[i + 1] * dims[i + 1]`.
    /// Returns `None` if any stride does not fit in an `isize`.
    pub fn strides(&self) -> Option<Vec<isize>> {
        let rank = self.dims.len();
        if rank == 0 {
            return Some(vec![]);
        }
        let mut strides = vec![0isize; rank];
        strides[rank - 1] = 1;
        for i in (0..rank - 1).rev() {
            let next = isize::try_from(self.dims[i + 1]).ok()?;
            strides[i] = strides[i + 1].checked_mul(next)?;
        }
        Some(strides)
    }

    /// Returns `true` if the shapes are compatible for a 2-D matrix multiply:
    /// `self` is `[M, K]` and `other` is `[K, N]`.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.rank() == 2 && other.rank() == 2 && self.dims[1] == other.dims[0]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::from(vec![2, 3])`.
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

/// Convenience: `Shape::from(&[2, 3][..])`.
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}

/// Convenience: `Shape::from([2, 3])`.
impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(dims.to_vec())
    }
}
