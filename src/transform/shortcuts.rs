// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Directional shortcuts
//!
//! X points right, Y forward, and Z up.

use super::{RotateYpr, Transform, Translate};
use crate::utils::Vec3;

pub fn right(x: f64) -> Transform {
    Translate::new(Vec3::new(x, 0.0, 0.0)).into()
}

pub fn left(x: f64) -> Transform {
    Translate::new(Vec3::new(-x, 0.0, 0.0)).into()
}

pub fn forward(y: f64) -> Transform {
    Translate::new(Vec3::new(0.0, y, 0.0)).into()
}

pub fn back(y: f64) -> Transform {
    Translate::new(Vec3::new(0.0, -y, 0.0)).into()
}

pub fn up(z: f64) -> Transform {
    Translate::new(Vec3::new(0.0, 0.0, z)).into()
}

pub fn down(z: f64) -> Transform {
    Translate::new(Vec3::new(0.0, 0.0, -z)).into()
}

pub fn yaw_left(angle: f64) -> Transform {
    RotateYpr::new(angle, 0.0, 0.0).into()
}

pub fn yaw_right(angle: f64) -> Transform {
    RotateYpr::new(-angle, 0.0, 0.0).into()
}

pub fn pitch_up(angle: f64) -> Transform {
    RotateYpr::new(0.0, angle, 0.0).into()
}

pub fn pitch_down(angle: f64) -> Transform {
    RotateYpr::new(0.0, -angle, 0.0).into()
}

pub fn roll_right(angle: f64) -> Transform {
    RotateYpr::new(0.0, 0.0, angle).into()
}

pub fn roll_left(angle: f64) -> Transform {
    RotateYpr::new(0.0, 0.0, -angle).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations() {
        assert_eq!(right(1.0), Transform::from(Translate::new(Vec3::new(1.0, 0.0, 0.0))));
        assert_eq!(left(1.0), right(-1.0));
        assert_eq!(back(2.0), forward(-2.0));
        assert_eq!(down(3.0), up(-3.0));
    }

    #[test]
    fn test_rotations() {
        assert_eq!(yaw_left(10.0), Transform::from(RotateYpr::new(10.0, 0.0, 0.0)));
        assert_eq!(yaw_right(10.0), yaw_left(-10.0));
        assert_eq!(pitch_down(20.0), pitch_up(-20.0));
        assert_eq!(roll_left(30.0), roll_right(-30.0));
    }
}
