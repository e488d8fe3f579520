// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Solid objects
//!
//! Objects are immutable values. Operators and postfix transforms always
//! build new objects:
//!
//! ```
//! use scadkit::object::{Cuboid, Sphere, Object};
//!
//! let cube: Object = Cuboid::cube(2.0).report().into();
//! let sphere: Object = Sphere::new(1.0).report().into();
//! let part = (cube - sphere).up(5.0);
//! ```

mod csg;
mod primitive;
mod transformed;

pub use csg::{Csg, CsgKind};
pub use primitive::{cylinder, Cuboid, Frustum, Primitive, Sphere};
pub use transformed::Transformed;

use crate::ast::ScadNode;
use crate::diagnostics::Checked;
use crate::error::Result;
use crate::transform::{shortcuts, Transform};
use crate::utils::{Tree, Vec3};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Object {
    Primitive(Primitive),
    Transformed(Transformed),
    Csg(Csg),
}

impl Object {
    pub fn union(children: Vec<Object>) -> Self {
        Object::Csg(Csg::new(CsgKind::Union, children))
    }

    pub fn intersection(children: Vec<Object>) -> Self {
        Object::Csg(Csg::new(CsgKind::Intersection, children))
    }

    pub fn difference(children: Vec<Object>) -> Self {
        Object::Csg(Csg::new(CsgKind::Difference, children))
    }

    pub fn empty(kind: CsgKind) -> Self {
        Object::Csg(Csg::empty(kind))
    }

    pub fn is_csg(&self, kind: CsgKind) -> bool {
        matches!(self, Object::Csg(csg) if csg.kind() == kind)
    }

    pub fn to_scad(&self) -> ScadNode {
        match self {
            Object::Primitive(p) => p.to_scad(),
            Object::Transformed(t) => t.to_scad(),
            Object::Csg(c) => c.to_scad(),
        }
    }

    pub fn to_tree(&self) -> Tree {
        match self {
            Object::Primitive(p) => Tree::leaf(p.to_string()),
            Object::Transformed(t) => t.to_tree(),
            Object::Csg(c) => c.to_tree(),
        }
    }

    pub fn transform(self, transform: Transform) -> Object {
        transform * self
    }

    pub fn translate(self, vector: Vec3) -> Object {
        Transform::translate(vector) * self
    }

    pub fn rotate_axis_angle(self, axis: Vec3, angle: f64) -> Result<Object> {
        Ok(Transform::rotate_axis_angle(axis, angle)? * self)
    }

    pub fn rotate_xyz(self, x: f64, y: f64, z: f64) -> Object {
        Transform::rotate_xyz(x, y, z) * self
    }

    pub fn rotate_ypr(self, yaw: f64, pitch: f64, roll: f64) -> Object {
        Transform::rotate_ypr(yaw, pitch, roll) * self
    }

    pub fn rotate_from_to(self, from: Vec3, to: Vec3, ignore_ambiguity: bool) -> Result<Checked<Object>> {
        Ok(Transform::rotate_from_to(from, to, ignore_ambiguity)?.map(|t| t * self))
    }

    pub fn scale_uniform(self, factor: f64) -> Object {
        Transform::scale_uniform(factor) * self
    }

    pub fn scale_axes(self, x: f64, y: f64, z: f64) -> Checked<Object> {
        Transform::scale_axes(x, y, z).map(|t| t * self)
    }

    pub fn scale_axis_factor(self, axis: Vec3, factor: f64) -> Result<Object> {
        Ok(Transform::scale_axis_factor(axis, factor)? * self)
    }

    pub fn right(self, x: f64) -> Object {
        shortcuts::right(x) * self
    }

    pub fn left(self, x: f64) -> Object {
        shortcuts::left(x) * self
    }

    pub fn forward(self, y: f64) -> Object {
        shortcuts::forward(y) * self
    }

    pub fn back(self, y: f64) -> Object {
        shortcuts::back(y) * self
    }

    pub fn up(self, z: f64) -> Object {
        shortcuts::up(z) * self
    }

    pub fn down(self, z: f64) -> Object {
        shortcuts::down(z) * self
    }

    pub fn yaw_left(self, angle: f64) -> Object {
        shortcuts::yaw_left(angle) * self
    }

    pub fn yaw_right(self, angle: f64) -> Object {
        shortcuts::yaw_right(angle) * self
    }

    pub fn pitch_up(self, angle: f64) -> Object {
        shortcuts::pitch_up(angle) * self
    }

    pub fn pitch_down(self, angle: f64) -> Object {
        shortcuts::pitch_down(angle) * self
    }

    pub fn roll_right(self, angle: f64) -> Object {
        shortcuts::roll_right(angle) * self
    }

    pub fn roll_left(self, angle: f64) -> Object {
        shortcuts::roll_left(angle) * self
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Primitive(p) => fmt::Display::fmt(p, f),
            Object::Transformed(_) => write!(f, "Transformed object"),
            Object::Csg(c) => fmt::Display::fmt(&c.kind(), f),
        }
    }
}

impl From<Primitive> for Object {
    fn from(primitive: Primitive) -> Self {
        Object::Primitive(primitive)
    }
}

impl From<Cuboid> for Object {
    fn from(cuboid: Cuboid) -> Self {
        Object::Primitive(Primitive::Cuboid(cuboid))
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Primitive(Primitive::Sphere(sphere))
    }
}

impl From<Frustum> for Object {
    fn from(frustum: Frustum) -> Self {
        Object::Primitive(Primitive::Frustum(frustum))
    }
}

impl From<Transformed> for Object {
    fn from(transformed: Transformed) -> Self {
        Object::Transformed(transformed)
    }
}

impl From<Csg> for Object {
    fn from(csg: Csg) -> Self {
        Object::Csg(csg)
    }
}
