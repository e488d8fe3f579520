// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive solids

use crate::ast::ScadNode;
use crate::diagnostics::{Checked, Warning, WarningKind};
use crate::error::Result;
use crate::transform::{RotateFromTo, Translate};
use crate::utils::math::{format_vector, non_zero, z_axis};
use crate::utils::Vec3;
use serde::Serialize;
use std::fmt;

/// Axis-aligned box with one corner at the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cuboid {
    size: Vec3,
}

impl Cuboid {
    pub fn new(x: f64, y: f64, z: f64) -> Checked<Self> {
        let warnings = [(x, "x"), (y, "y"), (z, "z")]
            .into_iter()
            .filter(|(size, _)| *size == 0.0)
            .map(|(_, name)| Warning::new(WarningKind::ZeroSize, format!("{} size is 0", name)))
            .collect();
        Checked::new(
            Self {
                size: Vec3::new(x, y, z),
            },
            warnings,
        )
    }

    pub fn cube(size: f64) -> Checked<Self> {
        let warnings = if size == 0.0 {
            vec![Warning::new(WarningKind::ZeroSize, "size is 0")]
        } else {
            Vec::new()
        };
        Checked::new(
            Self {
                size: Vec3::repeat(size),
            },
            warnings,
        )
    }

    pub fn size(&self) -> &Vec3 {
        &self.size
    }

    pub fn to_scad(&self) -> ScadNode {
        ScadNode::call("cube").param(self.size)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, d, h) = (self.size.x, self.size.y, self.size.z);
        if w == d && d == h {
            write!(f, "Cube with size {}", w)
        } else {
            write!(f, "Cuboid with width {}, depth {}, and height {}", w, d, h)
        }
    }
}

/// Sphere centered at the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Checked<Self> {
        let warnings = if radius == 0.0 {
            vec![Warning::new(WarningKind::ZeroRadius, "radius is 0")]
        } else {
            Vec::new()
        };
        Checked::new(Self { radius }, warnings)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn to_scad(&self) -> ScadNode {
        ScadNode::call("sphere").param(self.radius)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere with radius {}", self.radius)
    }
}

/// Truncated cone between two points; a cylinder when both radii match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frustum {
    base: Vec3,
    cap: Vec3,
    base_radius: f64,
    cap_radius: f64,
}

impl Frustum {
    pub fn new(base: Vec3, cap: Vec3, base_radius: f64, cap_radius: f64) -> Checked<Self> {
        let mut warnings = Vec::new();
        if base == cap {
            warnings.push(Warning::new(WarningKind::ZeroLength, "length is 0"));
        }
        if base_radius == 0.0 && cap_radius == 0.0 {
            warnings.push(Warning::new(WarningKind::ZeroRadius, "radius is 0"));
        }
        Checked::new(
            Self {
                base,
                cap,
                base_radius,
                cap_radius,
            },
            warnings,
        )
    }

    /// Frustum starting at the origin and extending `length` along `direction`
    pub fn direction_length(
        direction: Vec3,
        length: f64,
        base_radius: f64,
        cap_radius: f64,
    ) -> Result<Checked<Self>> {
        let direction = non_zero(direction, "direction")?;
        Ok(Self::new(
            Vec3::zeros(),
            direction.normalize() * length,
            base_radius,
            cap_radius,
        ))
    }

    pub fn base(&self) -> &Vec3 {
        &self.base
    }

    pub fn cap(&self) -> &Vec3 {
        &self.cap
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn cap_radius(&self) -> f64 {
        self.cap_radius
    }

    pub fn to_scad(&self) -> ScadNode {
        let axis = self.cap - self.base;
        let length = axis.norm();

        let mut node = ScadNode::call("cylinder").param(length);
        node = if self.base_radius == self.cap_radius {
            node.kw("r", self.base_radius)
        } else {
            node.kw("r1", self.base_radius).kw("r2", self.cap_radius)
        };

        // SCAD cylinders stand on the origin along Z
        if length > 0.0 {
            let direction = axis / length;
            if direction != z_axis() {
                node = RotateFromTo::acknowledged(z_axis(), direction).render_onto(Some(node));
            }
        }
        if self.base != Vec3::zeros() {
            node = Translate::new(self.base).render_onto(Some(node));
        }
        node
    }
}

impl fmt::Display for Frustum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frustum with base {} (base radius {}) and cap {} (cap radius {})",
            format_vector(&self.base),
            self.base_radius,
            format_vector(&self.cap),
            self.cap_radius
        )
    }
}

/// Cylinder between two points
pub fn cylinder(base: Vec3, cap: Vec3, radius: f64) -> Checked<Frustum> {
    Frustum::new(base, cap, radius, radius)
}

/// A primitive solid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Cuboid(Cuboid),
    Sphere(Sphere),
    Frustum(Frustum),
}

impl Primitive {
    pub fn to_scad(&self) -> ScadNode {
        match self {
            Primitive::Cuboid(c) => c.to_scad(),
            Primitive::Sphere(s) => s.to_scad(),
            Primitive::Frustum(f) => f.to_scad(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Cuboid(c) => fmt::Display::fmt(c, f),
            Primitive::Sphere(s) => fmt::Display::fmt(s, f),
            Primitive::Frustum(fr) => fmt::Display::fmt(fr, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::EmitOptions;
    use crate::utils::math::x_axis;

    fn code(node: &ScadNode) -> String {
        node.to_code(&EmitOptions::inline()).unwrap()
    }

    #[test]
    fn test_cuboid() {
        let cuboid = Cuboid::new(1.0, 2.0, 3.0).ignore_warnings();
        assert_eq!(code(&cuboid.to_scad()), "cube([1, 2, 3]);");
        assert_eq!(cuboid.to_string(), "Cuboid with width 1, depth 2, and height 3");
        assert_eq!(Cuboid::cube(2.0).ignore_warnings().to_string(), "Cube with size 2");
        assert_eq!(Cuboid::cube(2.0).value(), Cuboid::new(2.0, 2.0, 2.0).value());
    }

    #[test]
    fn test_zero_size_warnings() {
        let checked = Cuboid::new(1.0, 0.0, 0.0);
        let messages: Vec<String> = checked.warnings().iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["y size is 0", "z size is 0"]);
        assert!(Cuboid::cube(0.0).has_warning(WarningKind::ZeroSize));
        assert!(Sphere::new(0.0).has_warning(WarningKind::ZeroRadius));
        assert!(Sphere::new(1.0).warnings().is_empty());
    }

    #[test]
    fn test_sphere() {
        assert_eq!(code(&Sphere::new(1.5).ignore_warnings().to_scad()), "sphere(1.5);");
    }

    #[test]
    fn test_frustum_along_z() {
        let cylinder = cylinder(Vec3::zeros(), Vec3::new(0.0, 0.0, 5.0), 2.0).ignore_warnings();
        assert_eq!(code(&cylinder.to_scad()), "cylinder(5, r = 2);");

        let cone = Frustum::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 5.0), 2.0, 1.0).ignore_warnings();
        assert_eq!(code(&cone.to_scad()), "cylinder(5, r1 = 2, r2 = 1);");
    }

    #[test]
    fn test_frustum_placement() {
        let frustum = Frustum::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 7.0), 1.0, 1.0)
            .ignore_warnings();
        assert_eq!(
            code(&frustum.to_scad()),
            "translate([1, 2, 3]) { cylinder(4, r = 1); }"
        );

        let frustum = Frustum::new(Vec3::zeros(), Vec3::new(0.0, 3.0, 0.0), 1.0, 1.0)
            .ignore_warnings();
        assert_eq!(
            code(&frustum.to_scad()),
            "rotate(a = 90, v = [-1, 0, 0]) { cylinder(3, r = 1); }"
        );

        // Pointing down needs an arbitrary axis but raises no warning
        let frustum = Frustum::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -2.0), 1.0, 1.0);
        assert!(frustum.warnings().is_empty());
        assert_eq!(
            code(&frustum.ignore_warnings().to_scad()),
            "rotate(a = 180, v = [1, 0, 0]) { cylinder(2, r = 1); }"
        );
    }

    #[test]
    fn test_frustum_warnings() {
        let checked = Frustum::new(x_axis(), x_axis(), 0.0, 0.0);
        assert!(checked.has_warning(WarningKind::ZeroLength));
        assert!(checked.has_warning(WarningKind::ZeroRadius));
        assert_eq!(code(&checked.ignore_warnings().to_scad()), "translate([1, 0, 0]) { cylinder(0, r = 0); }");
    }

    #[test]
    fn test_direction_length() {
        let frustum = Frustum::direction_length(Vec3::new(0.0, 0.0, 2.0), 5.0, 1.0, 0.5)
            .unwrap()
            .ignore_warnings();
        assert_eq!(frustum.cap(), &Vec3::new(0.0, 0.0, 5.0));
        assert!(Frustum::direction_length(Vec3::zeros(), 5.0, 1.0, 1.0).is_err());
    }
}
