// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmark configuration loaded from TOML files or built from defaults.
//!
//! # TOML Format
//! ```toml
//! add_len = 1024
//! add_iters = 1000000
//! matmul_lhs = [128, 128]
//! matmul_rhs = [128, 128]
//! matmul_iters = 100
//! ```
//!
//! Every key is optional; missing keys take the default value.

use std::path::{Path, PathBuf};

use tensor_core::Shape;

/// Errors raised while loading or validating a [`BenchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialise error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Sizes and iteration counts for `tensor bench`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Length of the 1-D operands used by the add and neg timings.
    pub add_len: usize,
    /// Iterations of the add and neg timings.
    pub add_iters: usize,
    /// Left matmul operand, `[M, K]`.
    pub matmul_lhs: Shape,
    /// Right matmul operand, `[K, P]`.
    pub matmul_rhs: Shape,
    /// Iterations of the matmul timing.
    pub matmul_iters: usize,
}

impl BenchConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every timing has work to do and the matmul operands line up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.add_len == 0 {
            return Err(ConfigError::Invalid("add_len must be at least 1".into()));
        }
        if self.add_iters == 0 || self.matmul_iters == 0 {
            return Err(ConfigError::Invalid(
                "iteration counts must be at least 1".into(),
            ));
        }
        if !self.matmul_lhs.is_matmul_compatible(&self.matmul_rhs) {
            return Err(ConfigError::Invalid(format!(
                "matmul operands {} and {} are not [M, K] x [K, P]",
                self.matmul_lhs, self.matmul_rhs
            )));
        }
        Ok(())
    }

    /// Benchmark label for the matmul timing, e.g. `matmul_128x128x128`.
    pub fn matmul_label(&self) -> String {
        let lhs = self.matmul_lhs.dims();
        let rhs = self.matmul_rhs.dims();
        match (lhs, rhs) {
            ([m, k], [_, p]) => format!("matmul_{m}x{k}x{p}"),
            _ => format!("matmul_{}_{}", self.matmul_lhs, self.matmul_rhs),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            add_len: 1024,
            add_iters: 1_000_000,
            matmul_lhs: Shape::matrix(128, 128),
            matmul_rhs: Shape::matrix(128, 128),
            matmul_iters: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = BenchConfig::default();
        assert_eq!(c.add_len, 1024);
        assert_eq!(c.add_iters, 1_000_000);
        assert_eq!(c.matmul_iters, 100);
        assert!(c.validate().is_ok());
        assert_eq!(c.matmul_label(), "matmul_128x128x128");
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
add_len = 4096
add_iters = 10
matmul_lhs = [32, 16]
matmul_rhs = [16, 8]
matmul_iters = 3
"#;
        let c = BenchConfig::from_toml(toml).unwrap();
        assert_eq!(c.add_len, 4096);
        assert_eq!(c.add_iters, 10);
        assert_eq!(c.matmul_lhs, Shape::matrix(32, 16));
        assert_eq!(c.matmul_rhs, Shape::matrix(16, 8));
        assert_eq!(c.matmul_iters, 3);
        assert_eq!(c.matmul_label(), "matmul_32x16x8");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = BenchConfig::from_toml("matmul_iters = 7").unwrap();
        assert_eq!(c.matmul_iters, 7);
        assert_eq!(c.add_len, 1024);
        assert_eq!(c.matmul_lhs, Shape::matrix(128, 128));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = BenchConfig {
            add_len: 8,
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = BenchConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_incompatible_matmul_rejected() {
        let err = BenchConfig::from_toml("matmul_lhs = [4, 5]\nmatmul_rhs = [4, 5]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let c = BenchConfig {
            add_iters: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let err = BenchConfig::from_toml("add_len = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BenchConfig::from_file(Path::new("/nonexistent/bench.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
