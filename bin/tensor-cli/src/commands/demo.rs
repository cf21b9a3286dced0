// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tensor demo` command: build sample tensors and run one matmul.

use tensor_core::{matmul, Shape, Tensor};

fn sequential(shape: Shape) -> anyhow::Result<Tensor> {
    let mut t = Tensor::zeros(shape)?;
    t.fill_sequential();
    Ok(t)
}

pub fn execute(print_result: bool) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                 tensor · Demo Driver                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Small tensor ───────────────────────────────────────────
    let small = sequential(Shape::matrix(2, 2))?;
    println!("  2x2 sequential:");
    println!("{small}");
    println!();

    // ── Matmul ─────────────────────────────────────────────────
    let a = sequential(Shape::matrix(128, 128))?;
    let b = sequential(Shape::matrix(128, 64))?;
    tracing::info!(lhs = %a.shape(), rhs = %b.shape(), "running matmul");

    let result = matmul(&a.view(), &b.view())?;
    tracing::debug!(total_size = result.total_size(), "matmul finished");

    println!("  matmul {} x {}", a.shape(), b.shape());
    println!("   Shape:      {}", result.shape());
    println!("   Strides:    {:?}", result.strides());
    println!("   Contiguous: {}", result.is_contiguous());
    println!("   [0, 0]:     {:.6}", result.get_2d(0, 0)?);
    println!();

    if print_result {
        println!("{result}");
        println!();
    }

    Ok(())
}
