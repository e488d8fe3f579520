// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - writing SCAD source

mod exporter;

pub use exporter::{render_to_string, write_to, write_to_file};
