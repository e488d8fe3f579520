// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vector and matrix helpers on top of nalgebra

use crate::error::{Error, Result};
use nalgebra::{Matrix4, Rotation3, Unit, Vector3};

/// 3D vector type alias
pub type Vec3 = Vector3<f64>;

/// 4x4 homogeneous matrix type alias
pub type Mat4 = Matrix4<f64>;

/// Relative tolerance used for collinearity checks
const COLLINEAR_EPSILON: f64 = 1e-12;

pub fn x_axis() -> Vec3 {
    Vec3::x()
}

pub fn y_axis() -> Vec3 {
    Vec3::y()
}

pub fn z_axis() -> Vec3 {
    Vec3::z()
}

/// Geometry queries the transform layer needs beyond nalgebra's own
pub trait VectorExt {
    fn is_zero(&self) -> bool;

    /// True if both vectors lie on a common line through the origin,
    /// regardless of direction or length
    fn collinear(&self, other: &Self) -> bool;

    /// Signed unit coordinate axis closest to this vector
    fn closest_axis(&self) -> Self;

    /// Some vector orthogonal to this one; zero for the zero vector
    fn normal(&self) -> Self;

    /// Angle between two vectors in degrees
    fn angle_to(&self, other: &Self) -> f64;
}

impl VectorExt for Vec3 {
    fn is_zero(&self) -> bool {
        self.iter().all(|c| *c == 0.0)
    }

    fn collinear(&self, other: &Self) -> bool {
        let scale = self.norm_squared() * other.norm_squared();
        self.cross(other).norm_squared() <= COLLINEAR_EPSILON * COLLINEAR_EPSILON * scale
    }

    fn closest_axis(&self) -> Self {
        let index = self.iamax();
        let mut axis = Vec3::zeros();
        axis[index] = self[index].signum();
        axis
    }

    fn normal(&self) -> Self {
        // Swap a non-zero component with its successor and negate one of them
        let Some(first) = self.iter().position(|c| *c != 0.0) else {
            return Vec3::zeros();
        };
        let second = (first + 1) % 3;

        let mut normal = Vec3::zeros();
        normal[first] = -self[second];
        normal[second] = self[first];
        normal
    }

    fn angle_to(&self, other: &Self) -> f64 {
        // acos(u.v / |u||v|) loses precision near 0 and 180 degrees
        let u = self;
        let v = other;
        let a = u * v.norm() - v * u.norm();
        let b = u * v.norm() + v * u.norm();
        (2.0 * a.norm().atan2(b.norm())).to_degrees()
    }
}

/// Format as a SCAD-style list, e.g. `[1, 2, 3]`
pub fn format_vector(v: &Vec3) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}

/// Require a non-zero vector for the named argument
pub fn non_zero(vector: Vec3, label: &'static str) -> Result<Vec3> {
    if vector.is_zero() {
        Err(Error::ZeroVector { label })
    } else {
        Ok(vector)
    }
}

/// Affine transform `v -> v.x * x + v.y * y + v.z * z + t` in homogeneous form
///
/// The base vectors are not required to be orthogonal or normalized.
pub fn affine_matrix(x: &Vec3, y: &Vec3, z: &Vec3, t: &Vec3) -> Mat4 {
    #[rustfmt::skip]
    let m = Mat4::new(
        x.x, y.x, z.x, t.x,
        x.y, y.y, z.y, t.y,
        x.z, y.z, z.z, t.z,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation around a single coordinate axis (0, 1, or 2), angle in radians
pub fn rotation_matrix(axis_index: usize, angle: f64) -> Mat4 {
    let i1 = (axis_index + 1) % 3;
    let i2 = (axis_index + 2) % 3;
    let (s, c) = angle.sin_cos();

    let mut m = Mat4::identity();
    m[(i1, i1)] = c;
    m[(i1, i2)] = -s;
    m[(i2, i1)] = s;
    m[(i2, i2)] = c;
    m
}

/// Rotation around an arbitrary axis through the origin, angle in degrees
pub fn axis_angle_matrix(axis: &Vec3, degrees: f64) -> Mat4 {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), degrees.to_radians()).to_homogeneous()
}

/// Scale by `factor` along `axis`, leaving the orthogonal plane untouched
pub fn axis_scale_matrix(axis: &Vec3, factor: f64) -> Mat4 {
    let n = axis.normalize();
    let linear = nalgebra::Matrix3::identity() + (n * n.transpose()) * (factor - 1.0);
    linear.to_homogeneous()
}
