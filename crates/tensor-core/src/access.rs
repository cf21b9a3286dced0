// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bounds-checked element access by multi-index.
//!
//! Offsets always go through the stride dot-product, so they stay correct for
//! any layout. A bad index returns [`TensorError::OutOfRange`] and touches
//! no memory. So does a corrupted stride that points outside the buffer.

use crate::{Layout, Tensor, TensorError, TensorView, TensorViewMut};

fn locate(layout: &Layout, len: usize, index: &[usize]) -> Result<usize, TensorError> {
    let offset = layout.offset(index)?;
    if offset >= len {
        return Err(TensorError::OutOfRange {
            index: index.to_vec(),
            shape: layout.shape().clone(),
        });
    }
    Ok(offset)
}

impl TensorView<'_> {
    /// Reads the element at `index`, which must have exactly `rank` components.
    pub fn get(&self, index: &[usize]) -> Result<f32, TensorError> {
        let data = self.as_f32_slice();
        let offset = locate(self.layout(), data.len(), index)?;
        Ok(data[offset])
    }

    /// Reads `t[i]` from a rank-1 tensor.
    pub fn get_1d(&self, i: usize) -> Result<f32, TensorError> {
        self.get(&[i])
    }

    /// Reads `t[i, j]` from a rank-2 tensor.
    pub fn get_2d(&self, i: usize, j: usize) -> Result<f32, TensorError> {
        self.get(&[i, j])
    }

    /// Reads `t[i, j, k]` from a rank-3 tensor.
    pub fn get_3d(&self, i: usize, j: usize, k: usize) -> Result<f32, TensorError> {
        self.get(&[i, j, k])
    }

    /// Reads `t[i, j, k, l]` from a rank-4 tensor.
    pub fn get_4d(&self, i: usize, j: usize, k: usize, l: usize) -> Result<f32, TensorError> {
        self.get(&[i, j, k, l])
    }
}

impl TensorViewMut<'_> {
    /// Reads the element at `index`.
    pub fn get(&self, index: &[usize]) -> Result<f32, TensorError> {
        self.as_view().get(index)
    }

    /// Writes `value` at `index` in place.
    pub fn set(&mut self, index: &[usize], value: f32) -> Result<(), TensorError> {
        let len = self.as_f32_slice().len();
        let offset = locate(self.layout(), len, index)?;
        self.as_f32_slice_mut()[offset] = value;
        Ok(())
    }

    /// Writes `t[i]` on a rank-1 tensor.
    pub fn set_1d(&mut self, i: usize, value: f32) -> Result<(), TensorError> {
        self.set(&[i], value)
    }

    /// Writes `t[i, j]` on a rank-2 tensor.
    pub fn set_2d(&mut self, i: usize, j: usize, value: f32) -> Result<(), TensorError> {
        self.set(&[i, j], value)
    }

    /// Writes `t[i, j, k]` on a rank-3 tensor.
    pub fn set_3d(&mut self, i: usize, j: usize, k: usize, value: f32) -> Result<(), TensorError> {
        self.set(&[i, j, k], value)
    }

    /// Writes `t[i, j, k, l]` on a rank-4 tensor.
    pub fn set_4d(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        l: usize,
        value: f32,
    ) -> Result<(), TensorError> {
        self.set(&[i, j, k, l], value)
    }
}

impl Tensor {
    /// Reads `t[i]` from a rank-1 tensor.
    pub fn get_1d(&self, i: usize) -> Result<f32, TensorError> {
        self.view().get_1d(i)
    }

    /// Reads `t[i, j]` from a rank-2 tensor.
    pub fn get_2d(&self, i: usize, j: usize) -> Result<f32, TensorError> {
        self.view().get_2d(i, j)
    }

    /// Reads `t[i, j, k]` from a rank-3 tensor.
    pub fn get_3d(&self, i: usize, j: usize, k: usize) -> Result<f32, TensorError> {
        self.view().get_3d(i, j, k)
    }

    /// Reads `t[i, j, k, l]` from a rank-4 tensor.
    pub fn get_4d(&self, i: usize, j: usize, k: usize, l: usize) -> Result<f32, TensorError> {
        self.view().get_4d(i, j, k, l)
    }

    /// Writes `t[i]` on a rank-1 tensor.
    pub fn set_1d(&mut self, i: usize, value: f32) -> Result<(), TensorError> {
        self.view_mut().set_1d(i, value)
    }

    /// Writes `t[i, j]` on a rank-2 tensor.
    pub fn set_2d(&mut self, i: usize, j: usize, value: f32) -> Result<(), TensorError> {
        self.view_mut().set_2d(i, j, value)
    }

    /// Writes `t[i, j, k]` on a rank-3 tensor.
    pub fn set_3d(&mut self, i: usize, j: usize, k: usize, value: f32) -> Result<(), TensorError> {
        self.view_mut().set_3d(i, j, k, value)
    }

    /// Writes `t[i, j, k, l]` on a rank-4 tensor.
    pub fn set_4d(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        l: usize,
        value: f32,
    ) -> Result<(), TensorError> {
        self.view_mut().set_4d(i, j, k, l, value)
    }
}
