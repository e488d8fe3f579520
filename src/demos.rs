// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Built-in demo scenes

use crate::config::Config;
use crate::error::{Error, Result};
use crate::object::{Cuboid, Frustum, Object, Sphere};
use crate::transform::Transform;
use crate::utils::math::z_axis;
use crate::utils::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Union, intersection, and difference of a cube and a sphere
    Csg,
    /// One of each primitive
    Primitives,
    /// A plank rotated by yaw, pitch, and roll
    RotateYpr,
    /// Scaling along an arbitrary axis, a coordinate axis, and uniformly
    Scale,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Csg, Demo::Primitives, Demo::RotateYpr, Demo::Scale];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Csg => "csg",
            Demo::Primitives => "primitives",
            Demo::RotateYpr => "rotate-ypr",
            Demo::Scale => "scale",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Csg => "Union, intersection, and difference of a cube and a sphere",
            Demo::Primitives => "A cuboid, a sphere, and a cylinder side by side",
            Demo::RotateYpr => "A plank rotated by yaw, pitch, and roll",
            Demo::Scale => "A cube scaled along a skewed axis, the X axis, and uniformly",
        }
    }

    /// Output settings the scene is meant to be rendered with
    pub fn config(self) -> Config {
        match self {
            Demo::Csg => Config::default().with_resolution(60),
            Demo::Primitives => Config::default().with_resolution(24),
            Demo::RotateYpr | Demo::Scale => Config::default(),
        }
    }

    pub fn scene(self) -> Result<Object> {
        match self {
            Demo::Csg => Ok(csg()),
            Demo::Primitives => primitives(),
            Demo::RotateYpr => Ok(rotate_ypr()),
            Demo::Scale => scale(),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name() == name)
            .ok_or_else(|| Error::Config(format!("unknown demo: {}", name)))
    }
}

fn csg() -> Object {
    let size = 1.6;
    let cube = Object::from(Cuboid::cube(size).report()).translate(Vec3::repeat(-size / 2.0));
    let sphere = Object::from(Sphere::new(1.0).report());

    (cube.clone() + sphere.clone()).right(0.0)
        + (cube.clone() * sphere.clone()).right(2.0)
        + (cube - sphere).right(4.0)
}

fn primitives() -> Result<Object> {
    let cuboid = Object::from(Cuboid::new(3.0, 2.0, 1.0).report());
    let sphere = Object::from(Sphere::new(1.0).report());
    let cylinder = Object::from(Frustum::direction_length(z_axis(), 2.0, 1.0, 1.0)?.report());

    Ok(cuboid.right(0.0) + sphere.right(5.0) + cylinder.right(10.0))
}

fn rotate_ypr() -> Object {
    let plank = Object::from(Cuboid::new(20.0, 5.0, 1.0).report());
    Transform::rotate_ypr(45.0, -10.0, -20.0) * plank
}

fn scale() -> Result<Object> {
    let cube = Object::from(Cuboid::cube(20.0).report());

    let skewed = Transform::scale_axis_factor(Vec3::new(3.0, 2.0, 1.0), 2.0)? * cube.clone();
    let along_x = Transform::scale_axis_factor(Vec3::new(3.0, 0.0, 0.0), 2.0)? * cube.clone();
    let uniform = Transform::scale_uniform(2.0) * cube;

    Ok(skewed + along_x.right(50.0) + uniform.right(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::EmitOptions;
    use crate::object::CsgKind;

    #[test]
    fn test_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
        assert!(matches!("teapot".parse::<Demo>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_all_scenes_render() {
        for demo in Demo::ALL {
            let scene = demo.scene().unwrap();
            assert!(scene.to_scad().to_code(&demo.config().emit).is_ok(), "{} failed", demo);
        }
    }

    #[test]
    fn test_rotate_ypr_scene() {
        let code = Demo::RotateYpr
            .scene()
            .unwrap()
            .to_scad()
            .to_code(&EmitOptions::default())
            .unwrap();
        assert_eq!(
            code,
            [
                "// Yaw 45°, pitch -10°, roll -20°",
                "rotate([-10, 0, 45]) {",
                "    rotate([0, -20, 0]) {",
                "        cube([20, 5, 1]);",
                "    }",
                "}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_csg_scene_structure() {
        match Demo::Csg.scene().unwrap() {
            Object::Csg(union) => {
                assert_eq!(union.kind(), CsgKind::Union);
                assert_eq!(union.children().len(), 3);
            }
            other => panic!("unexpected scene: {:?}", other),
        }
    }
}
