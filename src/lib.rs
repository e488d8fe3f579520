// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadkit
//!
//! Composable solids and transforms rendered to OpenSCAD source.
//! Objects and transforms are immutable values combined with operators:
//! `+`, `*`, and `-` on objects build unions, intersections, and
//! differences; `*` on transforms chains them, and `transform * object`
//! places an object. The result renders to a SCAD syntax tree and from
//! there to source text.
//!
//! ```
//! use scadkit::{Cuboid, Object, Sphere, Transform, Vec3};
//!
//! let cube: Object = Cuboid::new(1.0, 1.0, 1.0).report().into();
//! let sphere: Object = Sphere::new(1.0).report().into();
//! let scene = Transform::translate(Vec3::new(0.0, 0.0, 1.0)) * (cube + sphere);
//!
//! let code = scadkit::render(&scene, &scadkit::EmitOptions::inline()).unwrap();
//! assert_eq!(code, "translate([0, 0, 1]) { union() { cube([1, 1, 1]); sphere(1); } }");
//! ```

pub mod algebra;
pub mod ast;
pub mod config;
pub mod demos;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod object;
pub mod transform;
pub mod utils;

pub use algebra::{BinaryOp, Operand};
pub use ast::{EmitOptions, ScadNode, Value};
pub use config::Config;
pub use diagnostics::{Checked, Warning, WarningKind};
pub use error::{Error, Result};
pub use io::{render_to_string, write_to_file};
pub use object::{Cuboid, Frustum, Object, Sphere};
pub use transform::Transform;
pub use utils::{Mat4, Vec3, VectorExt};

/// Render an object to SCAD source
pub fn render(object: &Object, options: &EmitOptions) -> Result<String> {
    object.to_scad().to_code(options)
}
