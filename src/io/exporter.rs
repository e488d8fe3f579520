// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SCAD source exporter

use crate::config::Config;
use crate::error::Result;
use crate::object::Object;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render an object to the complete contents of a SCAD file
pub fn render_to_string(object: &Object, config: &Config) -> Result<String> {
    let code = object.to_scad().to_code(&config.emit)?;

    let mut output = String::new();
    if let Some(resolution) = config.resolution {
        output.push_str(&format!("$fn = {};\n\n", resolution));
    }
    output.push_str(&code);
    output.push('\n');
    Ok(output)
}

/// Render an object and write it to any output stream
pub fn write_to(object: &Object, writer: &mut impl Write, config: &Config) -> Result<()> {
    let output = render_to_string(object, config)?;
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render an object and write it to a file, replacing any existing content
pub fn write_to_file(object: &Object, path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();

    // Nothing is created if emission fails
    let output = render_to_string(object, config)?;
    let mut file = File::create(path)?;
    file.write_all(output.as_bytes())?;

    log::debug!("wrote {} bytes to {}", output.len(), path.display());
    Ok(())
}
