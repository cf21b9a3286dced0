// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory layout: shape, strides, and index-to-offset translation.
//!
//! The offset of element `(i0, i1, ..., in)` is `i0 * strides[0] + ... + in * strides[n]`.
//! Layouts built by [`Layout::contiguous`] are always row-major; the strides
//! can only diverge from that through [`Layout::strides_mut`].

use crate::{Shape, TensorError};

/// Shape, signed element strides, and cached element count of a tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Vec<isize>,
    total_size: usize,
}

impl Layout {
    /// Builds the canonical row-major layout for `shape`.
    ///
    /// # Errors
    /// - [`TensorError::EmptyShape`] if `shape` has rank 0.
    /// - [`TensorError::Overflow`] if the element count, a stride, or the
    ///   byte size of the buffer does not fit the address space.
    pub fn contiguous(shape: Shape) -> Result<Self, TensorError> {
        if shape.rank() == 0 {
            return Err(TensorError::EmptyShape);
        }
        let overflow = || TensorError::Overflow {
            dims: shape.dims().to_vec(),
        };

        let total_size = shape.num_elements().ok_or_else(overflow)?;
        let bytes = total_size
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or_else(overflow)?;
        if bytes > isize::MAX as usize {
            return Err(overflow());
        }
        let strides = shape.strides().ok_or_else(overflow)?;

        Ok(Self {
            shape,
            strides,
            total_size,
        })
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the strides, in elements.
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Raw mutable access to the strides.
    ///
    /// Writing anything other than the row-major values makes the layout
    /// non-contiguous; flat-buffer operations then fail with
    /// [`TensorError::NonContiguous`]. Indexed access stays bounds-checked.
    pub fn strides_mut(&mut self) -> &mut [isize] {
        &mut self.strides
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the total number of elements.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Returns `true` if the strides match the canonical row-major layout.
    ///
    /// Scans from the last dimension to the first, expecting each stride to
    /// equal the product of all trailing dimensions.
    pub fn is_contiguous(&self) -> bool {
        let mut expected: isize = 1;
        for (&stride, &dim) in self.strides.iter().zip(self.shape.dims()).rev() {
            if stride != expected {
                return false;
            }
            // Cannot overflow for layouts built by `contiguous`; a corrupted
            // stride has already returned above.
            expected = expected.wrapping_mul(dim as isize);
        }
        true
    }

    /// Fails with [`TensorError::NonContiguous`] unless the layout is contiguous.
    pub fn ensure_contiguous(&self, op: &'static str) -> Result<(), TensorError> {
        if self.is_contiguous() {
            Ok(())
        } else {
            Err(TensorError::NonContiguous {
                op,
                shape: self.shape.clone(),
                strides: self.strides.clone(),
            })
        }
    }

    /// Translates a multi-index into a flat buffer offset.
    ///
    /// # Errors
    /// Returns [`TensorError::OutOfRange`] if `index.len() != rank`, any
    /// component is `>=` its dimension, or the stride dot-product is negative
    /// or overflows.
    pub fn offset(&self, index: &[usize]) -> Result<usize, TensorError> {
        let out_of_range = || TensorError::OutOfRange {
            index: index.to_vec(),
            shape: self.shape.clone(),
        };

        if index.len() != self.rank() {
            return Err(out_of_range());
        }

        let mut offset: isize = 0;
        for ((&i, &dim), &stride) in index.iter().zip(self.shape.dims()).zip(&self.strides) {
            if i >= dim {
                return Err(out_of_range());
            }
            // i < dim <= total_size, which fits in isize.
            offset = (i as isize)
                .checked_mul(stride)
                .and_then(|step| offset.checked_add(step))
                .ok_or_else(out_of_range)?;
        }
        usize::try_from(offset).map_err(|_| out_of_range())
    }
}
