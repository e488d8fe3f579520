// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rotation transforms
//!
//! All angles are in degrees. Euler rotations follow the SCAD convention:
//! `rotate([x, y, z])` rotates around X first, then Y, then Z.

use super::{join_parts, Transform};
use crate::ast::ScadNode;
use crate::diagnostics::{Checked, Warning, WarningKind};
use crate::error::Result;
use crate::utils::math::{axis_angle_matrix, format_vector, non_zero, rotation_matrix};
use crate::utils::{Mat4, Vec3, VectorExt};
use serde::Serialize;
use std::fmt;

/// Rotation by an angle around an axis through the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotateAxisAngle {
    axis: Vec3,
    angle: f64,
}

impl RotateAxisAngle {
    pub fn new(axis: Vec3, angle: f64) -> Result<Self> {
        Ok(Self {
            axis: non_zero(axis, "axis")?,
            angle,
        })
    }

    pub fn axis(&self) -> &Vec3 {
        &self.axis
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn inverse(&self) -> Self {
        Self {
            axis: -self.axis,
            angle: self.angle,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        axis_angle_matrix(&self.axis, self.angle)
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        ScadNode::call("rotate")
            .kw("a", self.angle)
            .kw("v", self.axis)
            .onto(target)
    }
}

impl fmt::Display for RotateAxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotate by {}° around {}", self.angle, format_vector(&self.axis))
    }
}

/// Euler rotation around X, then Y, then Z
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotateXyz {
    x: f64,
    y: f64,
    z: f64,
}

impl RotateXyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn angles(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Undo Z, then Y, then X
    pub fn inverse(&self) -> Transform {
        Transform::from(RotateXyz::new(-self.x, 0.0, 0.0))
            * Transform::from(RotateXyz::new(0.0, -self.y, 0.0))
            * Transform::from(RotateXyz::new(0.0, 0.0, -self.z))
    }

    pub fn to_matrix(&self) -> Mat4 {
        rotation_matrix(2, self.z.to_radians())
            * rotation_matrix(1, self.y.to_radians())
            * rotation_matrix(0, self.x.to_radians())
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        ScadNode::call("rotate").param(self.angles()).onto(target)
    }
}

impl fmt::Display for RotateXyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [(self.x, "X"), (self.y, "Y"), (self.z, "Z")]
            .into_iter()
            .filter(|(angle, _)| *angle != 0.0)
            .map(|(angle, axis)| format!("{}° around {}", angle, axis))
            .collect();

        if parts.is_empty() {
            write!(f, "Rotate by 0° around X, Y, and Z")
        } else {
            write!(f, "Rotate by {}", join_parts(&parts))
        }
    }
}

/// Vehicle-style rotation: yaw around Z, pitch around the rotated X, roll
/// around the twice rotated Y
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotateYpr {
    yaw: f64,
    pitch: f64,
    roll: f64,
}

impl RotateYpr {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn inverse(&self) -> Transform {
        Transform::from(RotateYpr::new(0.0, 0.0, -self.roll))
            * Transform::from(RotateYpr::new(0.0, -self.pitch, 0.0))
            * Transform::from(RotateYpr::new(-self.yaw, 0.0, 0.0))
    }

    /// The same rotation as a chain of Euler rotations, without no-op steps
    pub fn equivalent(&self) -> Transform {
        let mut steps: Vec<Transform> = Vec::new();
        if self.yaw != 0.0 || self.pitch != 0.0 {
            steps.push(RotateXyz::new(self.pitch, 0.0, self.yaw).into());
        }
        if self.roll != 0.0 {
            steps.push(RotateXyz::new(0.0, self.roll, 0.0).into());
        }
        Transform::Chained(steps)
    }

    pub fn to_matrix(&self) -> Mat4 {
        self.equivalent().to_matrix()
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        let node = match self.equivalent() {
            Transform::Chained(steps) if steps.is_empty() => {
                RotateXyz::new(0.0, 0.0, 0.0).render_onto(target)
            }
            equivalent => equivalent.render_onto(target),
        };
        node.commented(&self.to_string())
    }
}

impl fmt::Display for RotateYpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [(self.yaw, "yaw"), (self.pitch, "pitch"), (self.roll, "roll")]
            .into_iter()
            .filter(|(angle, _)| *angle != 0.0)
            .map(|(angle, name)| format!("{} {}°", name, angle))
            .collect();

        if parts.is_empty() {
            return write!(f, "Yaw, pitch, and roll by 0°");
        }

        let text = parts.join(", ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Shortest rotation that turns one direction into another
#[derive(Debug, Clone, Serialize)]
pub struct RotateFromTo {
    from: Vec3,
    to: Vec3,
    ignore_ambiguity: bool,
}

impl RotateFromTo {
    /// Rotation from `from` to `to`.
    ///
    /// Opposite directions leave the rotation axis undetermined; unless
    /// `ignore_ambiguity` is set, the result then carries an
    /// [`WarningKind::AmbiguousRotation`] warning.
    pub fn new(from: Vec3, to: Vec3, ignore_ambiguity: bool) -> Result<Checked<Self>> {
        let from = non_zero(from, "from")?;
        let to = non_zero(to, "to")?;

        let mut warnings = Vec::new();
        if !ignore_ambiguity && from.collinear(&to) && from.dot(&to) < 0.0 {
            warnings.push(Warning::new(
                WarningKind::AmbiguousRotation,
                format!(
                    "Rotation from {} to {} is ambiguous because the vectors are collinear and opposite",
                    format_vector(&from),
                    format_vector(&to)
                ),
            ));
        }

        Ok(Checked::new(
            Self {
                from,
                to,
                ignore_ambiguity,
            },
            warnings,
        ))
    }

    /// For callers that already know both vectors are non-zero and accept
    /// any axis for opposite directions
    pub(crate) fn acknowledged(from: Vec3, to: Vec3) -> Self {
        debug_assert!(!from.is_zero() && !to.is_zero());
        Self {
            from,
            to,
            ignore_ambiguity: true,
        }
    }

    pub fn from_vector(&self) -> &Vec3 {
        &self.from
    }

    pub fn to_vector(&self) -> &Vec3 {
        &self.to
    }

    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ignore_ambiguity: self.ignore_ambiguity,
        }
    }

    /// Unnormalized axis and angle in degrees; `None` for the identity
    fn axis_angle(&self) -> Option<(Vec3, f64)> {
        if self.from.collinear(&self.to) {
            if self.from.dot(&self.to) > 0.0 {
                None
            } else {
                // Any normal works
                Some((self.from.normal(), 180.0))
            }
        } else {
            Some((self.from.cross(&self.to), self.from.angle_to(&self.to)))
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        match self.axis_angle() {
            Some((axis, angle)) => axis_angle_matrix(&axis, angle),
            None => Mat4::identity(),
        }
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        match self.axis_angle() {
            Some((axis, angle)) => ScadNode::call("rotate")
                .kw("a", angle)
                .kw("v", axis.normalize())
                .onto(target)
                .commented(&self.to_string()),
            None => target.unwrap_or_else(|| ScadNode::call("rotate").param(Vec3::zeros())),
        }
    }
}

impl PartialEq for RotateFromTo {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for RotateFromTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotate from {} to {}",
            format_vector(&self.from),
            format_vector(&self.to)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::EmitOptions;
    use crate::error::Error;
    use crate::utils::math::{x_axis, y_axis, z_axis};
    use approx::assert_relative_eq;

    fn code(node: &ScadNode) -> String {
        node.to_code(&EmitOptions::inline()).unwrap()
    }

    fn commented(node: &ScadNode) -> String {
        node.to_code(&EmitOptions::default().with_indent("", "")).unwrap()
    }

    fn cube() -> ScadNode {
        ScadNode::call("cube").param(vec![1, 1, 1])
    }

    #[test]
    fn test_axis_angle() {
        assert!(matches!(
            RotateAxisAngle::new(Vec3::zeros(), 45.0),
            Err(Error::ZeroVector { label: "axis" })
        ));

        let rotate = RotateAxisAngle::new(Vec3::new(1.0, 2.0, 3.0), 45.0).unwrap();
        assert_eq!(
            code(&rotate.render_onto(Some(cube()))),
            "rotate(a = 45, v = [1, 2, 3]) { cube([1, 1, 1]); }"
        );
        assert_eq!(rotate.to_string(), "Rotate by 45° around [1, 2, 3]");
        assert_relative_eq!(
            rotate.to_matrix() * rotate.inverse().to_matrix(),
            Mat4::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_xyz() {
        let rotate = RotateXyz::new(60.0, 30.0, 15.0);
        assert_eq!(code(&rotate.render_onto(None)), "rotate([60, 30, 15]);");
        assert_eq!(
            rotate.to_string(),
            "Rotate by 60° around X, 30° around Y, and 15° around Z"
        );
        assert_eq!(RotateXyz::new(0.0, 30.0, 0.0).to_string(), "Rotate by 30° around Y");
        assert_eq!(
            RotateXyz::new(10.0, 0.0, 20.0).to_string(),
            "Rotate by 10° around X and 20° around Z"
        );
        assert_eq!(RotateXyz::new(0.0, 0.0, 0.0).to_string(), "Rotate by 0° around X, Y, and Z");
    }

    #[test]
    fn test_xyz_matrix_order() {
        // X first: the X axis stays put, then turns into Y around Z
        let rotate = RotateXyz::new(90.0, 0.0, 90.0);
        let m = rotate.to_matrix();
        assert_relative_eq!(m.transform_vector(&x_axis()), y_axis(), epsilon = 1e-12);
        assert_relative_eq!(m.transform_vector(&y_axis()), z_axis(), epsilon = 1e-12);
    }

    #[test]
    fn test_xyz_inverse() {
        let rotate = RotateXyz::new(60.0, 30.0, 15.0);
        let inverse = rotate.inverse();
        assert_eq!(
            inverse,
            Transform::Chained(vec![
                RotateXyz::new(-60.0, 0.0, 0.0).into(),
                RotateXyz::new(0.0, -30.0, 0.0).into(),
                RotateXyz::new(0.0, 0.0, -15.0).into(),
            ])
        );
        assert_relative_eq!(
            rotate.to_matrix() * inverse.to_matrix(),
            Mat4::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ypr_rendering() {
        let rotate = RotateYpr::new(45.0, -10.0, -20.0);
        assert_eq!(
            commented(&rotate.render_onto(Some(cube()))),
            [
                "// Yaw 45°, pitch -10°, roll -20°",
                "rotate([-10, 0, 45]) {",
                "rotate([0, -20, 0]) {",
                "cube([1, 1, 1]);",
                "}",
                "}",
            ]
            .join("\n")
        );

        // Zero components are skipped
        assert_eq!(
            code(&RotateYpr::new(0.0, 0.0, 30.0).render_onto(None)),
            "rotate([0, 30, 0]);"
        );
        assert_eq!(
            code(&RotateYpr::new(30.0, 0.0, 0.0).render_onto(None)),
            "rotate([0, 0, 30]);"
        );

        // All zero is still an explicit rotation
        assert_eq!(
            commented(&RotateYpr::new(0.0, 0.0, 0.0).render_onto(None)),
            "// Yaw, pitch, and roll by 0°\nrotate([0, 0, 0]);"
        );
    }

    #[test]
    fn test_ypr_axes() {
        // Yaw left, then pitch up: forward points up
        let m = RotateYpr::new(90.0, 90.0, 0.0).to_matrix();
        assert_relative_eq!(m.transform_vector(&y_axis()), z_axis(), epsilon = 1e-12);
        assert_relative_eq!(m.transform_vector(&x_axis()), y_axis(), epsilon = 1e-12);

        // Roll right tilts the right wing down
        let m = RotateYpr::new(0.0, 0.0, 90.0).to_matrix();
        assert_relative_eq!(m.transform_vector(&x_axis()), -z_axis(), epsilon = 1e-12);
    }

    #[test]
    fn test_ypr_inverse() {
        let rotate = RotateYpr::new(45.0, -10.0, -20.0);
        assert_relative_eq!(
            rotate.to_matrix() * rotate.inverse().to_matrix(),
            Mat4::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_from_to() {
        let checked = RotateFromTo::new(x_axis(), y_axis(), false).unwrap();
        assert!(checked.warnings().is_empty());
        let rotate = checked.ignore_warnings();

        assert_eq!(
            commented(&rotate.render_onto(Some(cube()))),
            "// Rotate from [1, 0, 0] to [0, 1, 0]\nrotate(a = 90, v = [0, 0, 1]) {\ncube([1, 1, 1]);\n}"
        );
        assert_relative_eq!(
            rotate.to_matrix().transform_vector(&x_axis()),
            y_axis(),
            epsilon = 1e-12
        );
        assert_eq!(rotate.inverse(), RotateFromTo::acknowledged(y_axis(), x_axis()));
    }

    #[test]
    fn test_from_to_zero_vectors() {
        assert!(matches!(
            RotateFromTo::new(Vec3::zeros(), y_axis(), false),
            Err(Error::ZeroVector { label: "from" })
        ));
        assert!(matches!(
            RotateFromTo::new(x_axis(), Vec3::zeros(), false),
            Err(Error::ZeroVector { label: "to" })
        ));
    }

    #[test]
    fn test_from_to_same_direction() {
        let rotate = RotateFromTo::new(x_axis(), x_axis() * 2.0, false)
            .unwrap()
            .ignore_warnings();
        assert_eq!(rotate.render_onto(Some(cube())), cube());
        assert_eq!(code(&rotate.render_onto(None)), "rotate([0, 0, 0]);");
        assert_eq!(rotate.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_from_to_opposite_direction() {
        let checked = RotateFromTo::new(x_axis(), -x_axis(), false).unwrap();
        assert!(checked.has_warning(WarningKind::AmbiguousRotation));

        let silent = RotateFromTo::new(x_axis(), -x_axis(), true).unwrap();
        assert!(silent.warnings().is_empty());

        // Deterministic 180° rotation around a normal of `from`
        let rotate = checked.ignore_warnings();
        assert_eq!(
            code(&rotate.render_onto(None)),
            "rotate(a = 180, v = [0, 1, 0]);"
        );
        assert_relative_eq!(
            rotate.to_matrix().transform_vector(&x_axis()),
            -x_axis(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_from_to_stable_angle() {
        let from = Vec3::new(1.0, 0.0, 0.0);
        let to = Vec3::new(1.0, 1e-9, 0.0);
        let rotate = RotateFromTo::acknowledged(from, to);
        let (_, angle) = rotate.axis_angle().unwrap();
        assert_relative_eq!(angle, 1e-9f64.to_degrees(), max_relative = 1e-6);
    }
}
