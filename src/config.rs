// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Output configuration

use crate::ast::EmitOptions;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file picked up by [`Config::load`]
pub const CONFIG_FILE: &str = "scadkit.toml";

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout of the emitted source
    pub emit: EmitOptions,
    /// Global `$fn` written at the top of output files
    pub resolution: Option<u32>,
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.as_ref().display(), e))
        })
    }

    /// Load `scadkit.toml` from the working directory, if present, and
    /// apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `SCADKIT_*` overrides; unparsable values are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(indent) = var("SCADKIT_INDENT") {
            self.emit.indent = indent;
        }

        if let Some(inline) = var("SCADKIT_INLINE") {
            self.emit.inline = inline.parse().unwrap_or(self.emit.inline);
        }

        if let Some(simplify) = var("SCADKIT_SIMPLIFY") {
            self.emit.simplify = simplify.parse().unwrap_or(self.emit.simplify);
        }

        if let Some(comments) = var("SCADKIT_COMMENTS") {
            self.emit.comments = comments.parse().unwrap_or(self.emit.comments);
        }

        if let Some(resolution) = var("SCADKIT_FN") {
            if let Ok(resolution) = resolution.parse() {
                self.resolution = Some(resolution);
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = Some(resolution);
        self
    }
}
