// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use std::borrow::Cow;

use crate::{Layout, Shape, TensorError};

/// An owned, n-dimensional `f32` tensor stored in contiguous memory.
///
/// `Tensor` owns its buffer and releases it exactly once when dropped.
/// Borrowed access goes through [`TensorView`] and [`TensorViewMut`], which
/// never own their data.
///
/// # Memory Layout
/// Data is stored in row-major (C) order. Strides are computed once at
/// construction from the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    layout: Layout,
    data: Vec<f32>,
}

/// Reserves and zero-fills a buffer of `len` elements without aborting on
/// allocation failure.
fn alloc_zeroed(len: usize) -> Result<Vec<f32>, TensorError> {
    let requested_bytes = len.saturating_mul(std::mem::size_of::<f32>());
    let mut data = Vec::new();
    if let Err(e) = data.try_reserve_exact(len) {
        tracing::warn!("tensor allocation of {requested_bytes} bytes failed: {e}");
        return Err(TensorError::Allocation { requested_bytes });
    }
    data.resize(len, 0.0);
    tracing::trace!("allocated tensor buffer: {len} elements ({requested_bytes} bytes)");
    Ok(data)
}

fn check_len(layout: &Layout, actual: usize) -> Result<(), TensorError> {
    if layout.total_size() != actual {
        return Err(TensorError::BufferSizeMismatch {
            expected: layout.total_size(),
            actual,
        });
    }
    Ok(())
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Errors
    /// - [`TensorError::EmptyShape`] for a rank-0 shape.
    /// - [`TensorError::Overflow`] if the buffer size overflows.
    /// - [`TensorError::Allocation`] if the buffer cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
    /// assert_eq!(t.total_size(), 6);
    /// assert_eq!(t.strides(), &[3, 1]);
    /// ```
    pub fn zeros(shape: Shape) -> Result<Self, TensorError> {
        let layout = Layout::contiguous(shape)?;
        let data = alloc_zeroed(layout.total_size())?;
        Ok(Self { layout, data })
    }

    /// Creates a tensor from a slice of `f32` values, copying them.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::from_f32(Shape::vector(3), &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(t.as_f32_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_f32(shape: Shape, values: &[f32]) -> Result<Self, TensorError> {
        let layout = Layout::contiguous(shape)?;
        check_len(&layout, values.len())?;
        let mut data = alloc_zeroed(values.len())?;
        data.copy_from_slice(values);
        Ok(Self { layout, data })
    }

    /// Creates a tensor that takes ownership of an existing buffer.
    pub fn from_vec(shape: Shape, data: Vec<f32>) -> Result<Self, TensorError> {
        let layout = Layout::contiguous(shape)?;
        check_len(&layout, data.len())?;
        Ok(Self { layout, data })
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }

    /// Returns the tensor's strides, in elements.
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Raw mutable access to the strides; see [`Layout::strides_mut`].
    pub fn strides_mut(&mut self) -> &mut [isize] {
        self.layout.strides_mut()
    }

    /// Returns the tensor's layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// Returns the number of elements.
    pub fn total_size(&self) -> usize {
        self.layout.total_size()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Always `true`: a `Tensor` releases its buffer on drop.
    pub fn owns_data(&self) -> bool {
        true
    }

    /// Returns `true` if the strides match the canonical row-major layout.
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            layout: Cow::Borrowed(&self.layout),
            data: self.data.as_slice(),
        }
    }

    /// Returns a mutable view over this tensor's data.
    pub fn view_mut(&mut self) -> TensorViewMut<'_> {
        TensorViewMut {
            layout: Cow::Borrowed(&self.layout),
            data: self.data.as_mut_slice(),
        }
    }

    /// Returns the flat buffer in storage order.
    pub fn as_f32_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the flat buffer mutably.
    pub fn as_f32_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the tensor and returns its buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Fills the tensor with a constant value.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Writes `data[i] = i` for every element, in storage order.
    pub fn fill_sequential(&mut self) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = i as f32;
        }
    }

    /// Reads the element at `index`; see [`TensorView::get`].
    pub fn get(&self, index: &[usize]) -> Result<f32, TensorError> {
        self.view().get(index)
    }

    /// Writes the element at `index`; see [`TensorViewMut::set`].
    pub fn set(&mut self, index: &[usize], value: f32) -> Result<(), TensorError> {
        self.view_mut().set(index, value)
    }
}

/// A borrowed, read-only view over tensor data.
///
/// Views are zero-copy and tied to the lifetime of the source buffer, which
/// may belong to a [`Tensor`] or to the caller.
#[derive(Debug, Clone)]
pub struct TensorView<'a> {
    layout: Cow<'a, Layout>,
    data: &'a [f32],
}

impl<'a> TensorView<'a> {
    /// Wraps externally owned memory as a row-major view of `shape`.
    ///
    /// # Errors
    /// Fails like [`Layout::contiguous`], or with
    /// [`TensorError::BufferSizeMismatch`] if `data.len()` does not match.
    pub fn from_slice(shape: Shape, data: &'a [f32]) -> Result<Self, TensorError> {
        let layout = Layout::contiguous(shape)?;
        check_len(&layout, data.len())?;
        Ok(Self {
            layout: Cow::Owned(layout),
            data,
        })
    }

    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }

    /// Returns the strides of the viewed tensor.
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Returns the layout of the viewed tensor.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// Returns the number of elements.
    pub fn total_size(&self) -> usize {
        self.layout.total_size()
    }

    /// Always `false`: views never release memory.
    pub fn owns_data(&self) -> bool {
        false
    }

    /// Returns `true` if the strides match the canonical row-major layout.
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Returns the flat buffer in storage order.
    pub fn as_f32_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Copies the viewed data into a new owned tensor.
    ///
    /// # Errors
    /// Returns [`TensorError::NonContiguous`] for a corrupted layout, since
    /// the copy is a flat-buffer operation.
    pub fn to_tensor(&self) -> Result<Tensor, TensorError> {
        self.layout.ensure_contiguous("to_tensor")?;
        Tensor::from_f32(self.shape().clone(), self.data)
    }
}

/// A borrowed, mutable view over tensor data.
#[derive(Debug)]
pub struct TensorViewMut<'a> {
    layout: Cow<'a, Layout>,
    data: &'a mut [f32],
}

impl<'a> TensorViewMut<'a> {
    /// Wraps externally owned mutable memory as a row-major view of `shape`.
    pub fn from_slice_mut(shape: Shape, data: &'a mut [f32]) -> Result<Self, TensorError> {
        let layout = Layout::contiguous(shape)?;
        check_len(&layout, data.len())?;
        Ok(Self {
            layout: Cow::Owned(layout),
            data,
        })
    }

    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }

    /// Returns the strides of the viewed tensor.
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Raw mutable access to the view's strides; see [`Layout::strides_mut`].
    ///
    /// A view over a [`Tensor`] gets its own copy of the layout on first
    /// write, so the source tensor's strides are left untouched.
    pub fn strides_mut(&mut self) -> &mut [isize] {
        self.layout.to_mut().strides_mut()
    }

    /// Returns the layout of the viewed tensor.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// Returns the number of elements.
    pub fn total_size(&self) -> usize {
        self.layout.total_size()
    }

    /// Always `false`: views never release memory.
    pub fn owns_data(&self) -> bool {
        false
    }

    /// Returns `true` if the strides match the canonical row-major layout.
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Reborrows this view as a read-only [`TensorView`].
    pub fn as_view(&self) -> TensorView<'_> {
        TensorView {
            layout: Cow::Borrowed(&self.layout),
            data: &*self.data,
        }
    }

    /// Returns the flat buffer in storage order.
    pub fn as_f32_slice(&self) -> &[f32] {
        &*self.data
    }

    /// Returns the flat buffer mutably.
    pub fn as_f32_slice_mut(&mut self) -> &mut [f32] {
        &mut *self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        assert_eq!(t.total_size(), 6);
        assert_eq!(t.rank(), 2);
        assert_eq!(t.shape(), &Shape::matrix(2, 3));
        assert_eq!(t.strides(), &[3, 1]);
        assert!(t.is_contiguous());
        assert!(t.owns_data());
        assert!(t.as_f32_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zeros_with_zero_dim() {
        let t = Tensor::zeros(Shape::new(vec![4, 0, 2])).unwrap();
        assert_eq!(t.total_size(), 0);
        assert!(t.is_empty());
        assert!(t.is_contiguous());
    }

    #[test]
    fn test_zeros_rank_zero() {
        assert_eq!(
            Tensor::zeros(Shape::new(vec![])),
            Err(TensorError::EmptyShape)
        );
    }

    #[test]
    fn test_zeros_overflow() {
        let result = Tensor::zeros(Shape::new(vec![usize::MAX, 2]));
        assert!(matches!(result, Err(TensorError::Overflow { .. })));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_zeros_allocation_failure() {
        // 2^60 elements = 4 EiB: passes the overflow check but no allocator
        // can satisfy it.
        let result = Tensor::zeros(Shape::new(vec![1 << 40, 1 << 20]));
        assert!(matches!(
            result,
            Err(TensorError::Allocation { requested_bytes }) if requested_bytes == 1 << 62
        ));
    }

    #[test]
    fn test_from_f32() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let t = Tensor::from_f32(Shape::matrix(2, 3), &data).unwrap();
        assert_eq!(t.as_f32_slice(), &data[..]);
    }

    #[test]
    fn test_from_f32_size_mismatch() {
        let result = Tensor::from_f32(Shape::matrix(2, 3), &[0.0; 5]);
        assert_eq!(
            result,
            Err(TensorError::BufferSizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_from_vec_roundtrip() {
        let t = Tensor::from_vec(Shape::vector(3), vec![7.0, 8.0, 9.0]).unwrap();
        assert_eq!(t.into_vec(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_fill() {
        let mut t = Tensor::zeros(Shape::vector(5)).unwrap();
        t.fill(3.5);
        assert!(t.as_f32_slice().iter().all(|&x| x == 3.5));
    }

    #[test]
    fn test_fill_sequential() {
        let mut t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        t.fill_sequential();
        assert_eq!(t.as_f32_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_view_lifetime() {
        let t = Tensor::from_f32(Shape::vector(4), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = t.view();
        assert_eq!(v.shape(), &Shape::vector(4));
        assert!(!v.owns_data());
        assert_eq!(v.as_f32_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_external_view() {
        let buf = [1.0f32, 2.0, 3.0, 4.0];
        let v = TensorView::from_slice(Shape::matrix(2, 2), &buf).unwrap();
        assert!(v.is_contiguous());
        assert_eq!(v.strides(), &[2, 1]);

        let owned = v.to_tensor().unwrap();
        assert!(owned.owns_data());
        assert_eq!(owned.as_f32_slice(), &buf);
    }

    #[test]
    fn test_external_view_size_mismatch() {
        let buf = [0.0f32; 3];
        assert!(matches!(
            TensorView::from_slice(Shape::matrix(2, 2), &buf),
            Err(TensorError::BufferSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_external_view_mut_writes_through() {
        let mut buf = [0.0f32; 4];
        {
            let mut v = TensorViewMut::from_slice_mut(Shape::vector(4), &mut buf).unwrap();
            v.as_f32_slice_mut()[2] = 9.0;
            assert!(!v.owns_data());
        }
        assert_eq!(buf, [0.0, 0.0, 9.0, 0.0]);
    }

    #[test]
    fn test_view_mut_stride_corruption_is_local() {
        let mut t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        {
            let mut v = t.view_mut();
            v.strides_mut()[1] = 2;
            assert!(!v.is_contiguous());
        }
        assert!(t.is_contiguous());
    }

    #[test]
    fn test_tensor_stride_corruption() {
        let mut t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
        assert!(t.is_contiguous());
        t.strides_mut()[1] = 2;
        assert!(!t.is_contiguous());
        assert!(!t.view().is_contiguous());
        assert!(matches!(
            t.view().to_tensor(),
            Err(TensorError::NonContiguous { .. })
        ));
    }
}
