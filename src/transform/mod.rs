// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transform values and their composition
//!
//! Composition flattens: multiplying transforms always yields one
//! [`Transform::Chained`] whose elements are the non-chained operands in
//! order, so `(a * b) * c == a * (b * c)`.

mod rotate;
mod scale;
pub mod shortcuts;
mod translate;

pub use rotate::{RotateAxisAngle, RotateFromTo, RotateXyz, RotateYpr};
pub use scale::{ScaleAxes, ScaleAxisFactor, ScaleUniform};
pub use translate::Translate;

use crate::ast::ScadNode;
use crate::diagnostics::Checked;
use crate::error::Result;
use crate::utils::{Mat4, Tree, Vec3};
use nalgebra::Point3;
use serde::Serialize;
use std::fmt;
use std::ops::Mul;

/// A spatial transform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Transform {
    Translate(Translate),
    RotateAxisAngle(RotateAxisAngle),
    RotateXyz(RotateXyz),
    RotateYpr(RotateYpr),
    RotateFromTo(RotateFromTo),
    ScaleUniform(ScaleUniform),
    ScaleAxes(ScaleAxes),
    ScaleAxisFactor(ScaleAxisFactor),
    /// Applied right to left, like matrix products: the last element acts
    /// on the target first. Empty is the identity.
    Chained(Vec<Transform>),
}

impl Transform {
    pub fn identity() -> Self {
        Transform::Chained(Vec::new())
    }

    pub fn translate(vector: Vec3) -> Self {
        Translate::new(vector).into()
    }

    pub fn rotate_axis_angle(axis: Vec3, angle: f64) -> Result<Self> {
        Ok(RotateAxisAngle::new(axis, angle)?.into())
    }

    pub fn rotate_xyz(x: f64, y: f64, z: f64) -> Self {
        RotateXyz::new(x, y, z).into()
    }

    pub fn rotate_ypr(yaw: f64, pitch: f64, roll: f64) -> Self {
        RotateYpr::new(yaw, pitch, roll).into()
    }

    pub fn rotate_from_to(from: Vec3, to: Vec3, ignore_ambiguity: bool) -> Result<Checked<Self>> {
        Ok(RotateFromTo::new(from, to, ignore_ambiguity)?.map(Into::into))
    }

    pub fn scale_uniform(factor: f64) -> Self {
        ScaleUniform::new(factor).into()
    }

    pub fn scale_axes(x: f64, y: f64, z: f64) -> Checked<Self> {
        ScaleAxes::new(x, y, z).map(Into::into)
    }

    pub fn scale_axis_factor(axis: Vec3, factor: f64) -> Result<Self> {
        Ok(ScaleAxisFactor::new(axis, factor)?.into())
    }

    /// An explicit chain; nested chains are kept as given
    pub fn chained(transforms: Vec<Transform>) -> Self {
        Transform::Chained(transforms)
    }

    /// The transforms this one consists of when composed: the list of a
    /// chain, or the transform itself
    pub fn elements(&self) -> &[Transform] {
        match self {
            Transform::Chained(list) => list,
            other => std::slice::from_ref(other),
        }
    }

    fn into_elements(self) -> Vec<Transform> {
        match self {
            Transform::Chained(list) => list,
            other => vec![other],
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Transform::Chained(list) if list.is_empty())
    }

    /// Fails only for scales with a zero factor
    pub fn inverse(&self) -> Result<Transform> {
        Ok(match self {
            Transform::Translate(t) => t.inverse().into(),
            Transform::RotateAxisAngle(r) => r.inverse().into(),
            Transform::RotateXyz(r) => r.inverse(),
            Transform::RotateYpr(r) => r.inverse(),
            Transform::RotateFromTo(r) => r.inverse().into(),
            Transform::ScaleUniform(s) => s.inverse()?.into(),
            Transform::ScaleAxes(s) => s.inverse()?.into(),
            Transform::ScaleAxisFactor(s) => s.inverse()?.into(),
            Transform::Chained(list) => {
                let mut inverted = Vec::with_capacity(list.len());
                for t in list.iter().rev() {
                    inverted.extend(t.inverse()?.into_elements());
                }
                Transform::Chained(inverted)
            }
        })
    }

    /// Affine matrix in homogeneous coordinates
    pub fn to_matrix(&self) -> Mat4 {
        match self {
            Transform::Translate(t) => t.to_matrix(),
            Transform::RotateAxisAngle(r) => r.to_matrix(),
            Transform::RotateXyz(r) => r.to_matrix(),
            Transform::RotateYpr(r) => r.to_matrix(),
            Transform::RotateFromTo(r) => r.to_matrix(),
            Transform::ScaleUniform(s) => s.to_matrix(),
            Transform::ScaleAxes(s) => s.to_matrix(),
            Transform::ScaleAxisFactor(s) => s.to_matrix(),
            Transform::Chained(list) => list
                .iter()
                .fold(Mat4::identity(), |acc, t| acc * t.to_matrix()),
        }
    }

    /// Render as a SCAD node wrapping `target`.
    ///
    /// Never fails; an empty chain without a target renders as the empty
    /// statement.
    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        match self {
            Transform::Translate(t) => t.render_onto(target),
            Transform::RotateAxisAngle(r) => r.render_onto(target),
            Transform::RotateXyz(r) => r.render_onto(target),
            Transform::RotateYpr(r) => r.render_onto(target),
            Transform::RotateFromTo(r) => r.render_onto(target),
            Transform::ScaleUniform(s) => s.render_onto(target),
            Transform::ScaleAxes(s) => s.render_onto(target),
            Transform::ScaleAxisFactor(s) => s.render_onto(target),
            Transform::Chained(list) => list
                .iter()
                .rev()
                .fold(target, |acc, t| Some(t.render_onto(acc)))
                .unwrap_or_else(ScadNode::empty),
        }
    }

    pub fn to_tree(&self) -> Tree {
        match self {
            Transform::Chained(list) => {
                Tree::new(self.to_string(), list.iter().map(Transform::to_tree).collect())
            }
            other => Tree::leaf(other.to_string()),
        }
    }
}

/// `a`, `a and b`, or `a, b, and c`
pub(crate) fn join_parts(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate(t) => fmt::Display::fmt(t, f),
            Transform::RotateAxisAngle(r) => fmt::Display::fmt(r, f),
            Transform::RotateXyz(r) => fmt::Display::fmt(r, f),
            Transform::RotateYpr(r) => fmt::Display::fmt(r, f),
            Transform::RotateFromTo(r) => fmt::Display::fmt(r, f),
            Transform::ScaleUniform(s) => fmt::Display::fmt(s, f),
            Transform::ScaleAxes(s) => fmt::Display::fmt(s, f),
            Transform::ScaleAxisFactor(s) => fmt::Display::fmt(s, f),
            Transform::Chained(list) => {
                let noun = if list.len() == 1 { "transform" } else { "transforms" };
                write!(f, "Chained transform ({} {})", list.len(), noun)
            }
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Transform {
                fn from(value: $variant) -> Self {
                    Transform::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Translate,
    RotateAxisAngle,
    RotateXyz,
    RotateYpr,
    RotateFromTo,
    ScaleUniform,
    ScaleAxes,
    ScaleAxisFactor,
);

impl Mul for Transform {
    type Output = Transform;

    /// Concatenate the element lists of both operands
    fn mul(self, rhs: Transform) -> Transform {
        let mut list = self.into_elements();
        list.extend(rhs.into_elements());
        Transform::Chained(list)
    }
}

impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        Transform::Chained(
            self.elements()
                .iter()
                .chain(rhs.elements())
                .cloned()
                .collect(),
        )
    }
}

impl Mul<Vec3> for &Transform {
    type Output = Vec3;

    /// Apply the transform to a point
    fn mul(self, point: Vec3) -> Vec3 {
        self.to_matrix().transform_point(&Point3::from(point)).coords
    }
}

impl Mul<Vec3> for Transform {
    type Output = Vec3;

    fn mul(self, point: Vec3) -> Vec3 {
        &self * point
    }
}
