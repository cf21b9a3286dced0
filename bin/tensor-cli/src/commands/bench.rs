// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tensor bench` command: wall-clock timings of the core kernels.
//!
//! A quick manual harness; `cargo bench` runs the statistically sound
//! criterion suite. Each line reports the mean cost of one call:
//!
//! ```text
//! add_1d_1024              :     512.34 ns/op  (1000000 iters)
//! ```

use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use tensor_core::{add, matmul, neg, Shape, Tensor};

use crate::config::BenchConfig;

pub fn execute(
    config_path: Option<&Path>,
    add_iters: Option<usize>,
    matmul_iters: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading bench config");
            BenchConfig::from_file(path)?
        }
        None => BenchConfig::default(),
    };
    if let Some(n) = add_iters {
        config.add_iters = n;
    }
    if let Some(n) = matmul_iters {
        config.matmul_iters = n;
    }
    config.validate()?;
    tracing::debug!(?config, "bench config resolved");

    // ── Elementwise ────────────────────────────────────────────
    {
        let a = sequential(Shape::vector(config.add_len))?;
        let b = sequential(Shape::vector(config.add_len))?;

        report(&format!("add_1d_{}", config.add_len), config.add_iters, || {
            add(&a.view(), &b.view()).map(|c| drop(black_box(c)))
        })?;

        let mut t = sequential(Shape::vector(config.add_len))?;
        report(&format!("neg_1d_{}", config.add_len), config.add_iters, || {
            neg(black_box(&mut t.view_mut()))
        })?;
    }

    // ── Matmul ─────────────────────────────────────────────────
    {
        let a = sequential(config.matmul_lhs.clone())?;
        let b = sequential(config.matmul_rhs.clone())?;

        report(&config.matmul_label(), config.matmul_iters, || {
            matmul(&a.view(), &b.view()).map(|c| drop(black_box(c)))
        })?;
    }

    Ok(())
}

fn sequential(shape: Shape) -> anyhow::Result<Tensor> {
    let mut t = Tensor::zeros(shape)?;
    t.fill_sequential();
    Ok(t)
}

/// Runs `op` `iters` times and prints the mean time per call.
///
/// Stops at the first error so a failing kernel is not reported as fast.
fn report<F>(name: &str, iters: usize, mut op: F) -> anyhow::Result<()>
where
    F: FnMut() -> Result<(), tensor_core::TensorError>,
{
    let start = Instant::now();
    for _ in 0..iters {
        op()?;
    }
    let total_ns = start.elapsed().as_nanos() as f64;
    let ns_per = total_ns / iters as f64;
    println!("{name:<24} : {ns_per:>10.2} ns/op  ({iters} iters)");
    Ok(())
}
