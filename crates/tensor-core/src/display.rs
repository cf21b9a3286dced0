// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Human-readable rendering of tensors as nested bracket groups.
//!
//! ```text
//! tensor([[0.000000, 1.000000],
//!         [2.000000, 3.000000]])
//! ```
//!
//! Debugging aid only; the exact format is not stable.

use std::fmt;

use crate::{Tensor, TensorView, TensorViewMut};

const PREFIX: &str = "tensor(";

fn write_group(
    f: &mut fmt::Formatter<'_>,
    view: &TensorView<'_>,
    depth: usize,
    base: isize,
) -> fmt::Result {
    let dims = view.shape().dims();
    let stride = view.strides()[depth];
    let last = depth + 1 == dims.len();
    let data = view.as_f32_slice();

    write!(f, "[")?;
    for idx in 0..dims[depth] {
        if idx > 0 {
            if last {
                write!(f, ", ")?;
            } else {
                write!(f, ",\n{:width$}", "", width = PREFIX.len() + depth + 1)?;
            }
        }
        let offset = base + idx as isize * stride;
        if last {
            match usize::try_from(offset).ok().and_then(|o| data.get(o)) {
                Some(x) => write!(f, "{x:.6}")?,
                None => write!(f, "?")?,
            }
        } else {
            write_group(f, view, depth + 1, offset)?;
        }
    }
    write!(f, "]")
}

impl fmt::Display for TensorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_contiguous() {
            return write!(
                f,
                "{PREFIX}<non-contiguous shape={} strides={:?}>)",
                self.shape(),
                self.strides()
            );
        }
        write!(f, "{PREFIX}")?;
        write_group(f, self, 0, 0)?;
        write!(f, ")")
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

impl fmt::Display for TensorViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}
