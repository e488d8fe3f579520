// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scale transforms

use super::{join_parts, RotateFromTo, Transform};
use crate::ast::ScadNode;
use crate::diagnostics::{Checked, Warning, WarningKind};
use crate::error::{Error, Result};
use crate::utils::math::{axis_scale_matrix, format_vector, non_zero, x_axis, y_axis, z_axis};
use crate::utils::{Mat4, Vec3, VectorExt};
use serde::Serialize;
use std::fmt;

fn reciprocal(factor: f64, what: &str) -> Result<f64> {
    if factor == 0.0 {
        Err(Error::Singular(format!("{} is 0", what)))
    } else {
        Ok(1.0 / factor)
    }
}

/// Same factor along all three axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleUniform {
    factor: f64,
}

impl ScaleUniform {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn inverse(&self) -> Result<Self> {
        Ok(Self::new(reciprocal(self.factor, "scale factor")?))
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_scaling(self.factor)
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        ScadNode::call("scale")
            .param(Vec3::repeat(self.factor))
            .onto(target)
    }
}

impl fmt::Display for ScaleUniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform scale by {}", self.factor)
    }
}

/// Independent factors along X, Y, and Z
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleAxes {
    factors: Vec3,
}

impl ScaleAxes {
    /// Zero factors flatten the object and make the scale singular; each one
    /// is reported as a [`WarningKind::ZeroScale`] warning.
    pub fn new(x: f64, y: f64, z: f64) -> Checked<Self> {
        let warnings = [(x, "x"), (y, "y"), (z, "z")]
            .into_iter()
            .filter(|(factor, _)| *factor == 0.0)
            .map(|(_, name)| Warning::new(WarningKind::ZeroScale, format!("{} is 0", name)))
            .collect();
        Checked::new(Self::from_factors(Vec3::new(x, y, z)), warnings)
    }

    pub(crate) fn from_factors(factors: Vec3) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &Vec3 {
        &self.factors
    }

    pub fn inverse(&self) -> Result<Self> {
        Ok(Self::from_factors(Vec3::new(
            reciprocal(self.factors.x, "x")?,
            reciprocal(self.factors.y, "y")?,
            reciprocal(self.factors.z, "z")?,
        )))
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_nonuniform_scaling(&self.factors)
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        ScadNode::call("scale").param(self.factors).onto(target)
    }
}

impl fmt::Display for ScaleAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .factors
            .iter()
            .zip(["X", "Y", "Z"])
            .filter(|(factor, _)| **factor != 1.0)
            .map(|(factor, axis)| format!("{} along {}", factor, axis))
            .collect();

        if parts.is_empty() {
            write!(f, "Scale by 1 along X, Y, and Z")
        } else {
            write!(f, "Scale by {}", join_parts(&parts))
        }
    }
}

/// Scale by a factor along an arbitrary axis, leaving the plane orthogonal
/// to it untouched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleAxisFactor {
    axis: Vec3,
    factor: f64,
}

impl ScaleAxisFactor {
    pub fn new(axis: Vec3, factor: f64) -> Result<Self> {
        Ok(Self {
            axis: non_zero(axis, "axis")?,
            factor,
        })
    }

    pub fn axis(&self) -> &Vec3 {
        &self.axis
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn inverse(&self) -> Result<Self> {
        Ok(Self {
            axis: self.axis,
            factor: reciprocal(self.factor, "scale factor")?,
        })
    }

    pub fn to_matrix(&self) -> Mat4 {
        axis_scale_matrix(&self.axis, self.factor)
    }

    /// Rotate the closest coordinate axis onto the scale axis, scale along
    /// the coordinate axis, and rotate back
    pub fn equivalent(&self) -> Transform {
        let closest = self.axis.closest_axis();
        let mut factors = Vec3::repeat(1.0);
        factors[closest.iamax()] = self.factor;

        Transform::Chained(vec![
            RotateFromTo::acknowledged(closest, self.axis).into(),
            ScaleAxes::from_factors(factors).into(),
            RotateFromTo::acknowledged(self.axis, closest).into(),
        ])
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        let scale = |factors: Vec3, target: Option<ScadNode>| {
            ScadNode::call("scale").param(factors).onto(target)
        };

        if self.factor == 1.0 {
            return scale(Vec3::repeat(1.0), target);
        }

        for (index, axis) in [x_axis(), y_axis(), z_axis()].iter().enumerate() {
            if self.axis.collinear(axis) {
                let mut factors = Vec3::repeat(1.0);
                factors[index] = self.factor;
                return scale(factors, target);
            }
        }

        self.equivalent().render_onto(target)
    }
}

impl fmt::Display for ScaleAxisFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scale along {} by {}", format_vector(&self.axis), self.factor)
    }
}
