// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor arithmetic operations.
//!
//! Unary operations rewrite their receiver in place; binary operations and
//! matmul allocate a fresh, exclusively owned result. Every kernel reads its
//! operands as flat row-major buffers and checks contiguity first.

mod binary_op;
mod matmul_op;
mod unary_op;

pub use binary_op::{add, apply_binary, div, mul, sub};
pub use matmul_op::{matmul, matmul_into};
pub use unary_op::{apply_unary, exp2, log2, neg, sin, sqrt};
