// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor
//!
//! Command-line harness for the tensor-core library.
//!
//! ## Usage
//! ```bash
//! # Build a few tensors, multiply two matrices, print the result
//! tensor demo --print-result
//!
//! # Time add, neg and matmul with default sizes
//! tensor bench
//!
//! # Override sizes from a config file and iterations from the command line
//! tensor -c bench.toml bench --matmul-iters 10
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tensor",
    about = "Dense f32 tensor demo and benchmark harness",
    version,
    author
)]
struct Cli {
    /// Path to a TOML benchmark configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build sample tensors and multiply a 128x128 by a 128x64 matrix.
    Demo {
        /// Print the full matmul result.
        #[arg(long)]
        print_result: bool,
    },

    /// Time the add, neg and matmul kernels.
    Bench {
        /// Iterations for the 1-D add and neg timings.
        #[arg(long)]
        add_iters: Option<usize>,

        /// Iterations for the matmul timing.
        #[arg(long)]
        matmul_iters: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { print_result } => commands::demo::execute(print_result),
        Commands::Bench {
            add_iters,
            matmul_iters,
        } => commands::bench::execute(cli.config.as_deref(), add_iters, matmul_iters),
    }
}
