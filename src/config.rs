//! TOML configuration for the cryptogram workbench
//!
//! Every field is optional; anything missing falls back to its default.
//!
//! # Example cryptogram.toml
//!
//! ```toml
//! [display]
//! wrap_width = 80
//! color = false
//!
//! [ngram]
//! default_n = 3
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub ngram: NgramConfig,
}

/// Terminal rendering settings for the REPL
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Maximum line width when printing the puzzle and its solution
    pub wrap_width: usize,
    /// Emit ANSI colors and text attributes
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wrap_width: 110,
            color: true,
        }
    }
}

/// Settings for `compute-logprobs`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NgramConfig {
    /// Window size used when `-n` is not given
    pub default_n: usize,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self { default_n: 4 }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use cryptogram::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_file("cryptogram.toml")?;
    /// println!("wrapping at {}", config.display.wrap_width);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.display.wrap_width == 0 {
            bail!("display.wrap_width must be >= 1");
        }
        if self.ngram.default_n == 0 {
            bail!("ngram.default_n must be >= 1");
        }
        Ok(())
    }
}
