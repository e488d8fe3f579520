// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SCAD syntax tree module
//!
//! Every transform and object renders to a [`ScadNode`] tree, which the
//! emitter turns into OpenSCAD-compatible source text.

mod emitter;
mod node;

pub use emitter::EmitOptions;
pub use node::{ScadNode, Value};
