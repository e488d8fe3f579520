// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Warnings, errors, and runtime operand dispatch

use scadkit::{
    BinaryOp, Config, Cuboid, Error, Frustum, Object, Operand, Sphere, Transform, Vec3,
    WarningKind,
};
use tempfile::TempDir;

#[test]
fn degenerate_primitives_warn_but_build() {
    let flat = Cuboid::new(1.0, 0.0, 1.0);
    assert!(flat.has_warning(WarningKind::ZeroSize));
    assert_eq!(flat.warnings().len(), 1);

    let point = Sphere::new(0.0);
    assert!(point.has_warning(WarningKind::ZeroRadius));

    let disc = Frustum::new(Vec3::zeros(), Vec3::zeros(), 1.0, 1.0);
    assert!(disc.has_warning(WarningKind::ZeroLength));

    let object: Object = flat.ignore_warnings().into();
    assert!(object.to_scad().to_code(&Default::default()).is_ok());
}

#[test]
fn opposite_rotation_warns_unless_acknowledged() {
    let silent = Transform::rotate_from_to(Vec3::x(), Vec3::y(), false).unwrap();
    assert!(silent.warnings().is_empty());

    let z = Vec3::new(0.0, 0.0, 1.0);
    let warned = Transform::rotate_from_to(z, -z, false).unwrap();
    assert!(warned.has_warning(WarningKind::AmbiguousRotation));

    let quiet = Transform::rotate_from_to(z, -z, true).unwrap();
    assert!(quiet.warnings().is_empty());
    assert_eq!(warned.ignore_warnings(), quiet.ignore_warnings());
}

#[test]
fn zero_vectors_are_rejected() {
    assert!(matches!(
        Transform::rotate_axis_angle(Vec3::zeros(), 45.0),
        Err(Error::ZeroVector { label: "axis" })
    ));
    assert!(matches!(
        Transform::rotate_from_to(Vec3::zeros(), Vec3::x(), false),
        Err(Error::ZeroVector { .. })
    ));
    assert!(matches!(
        Transform::scale_axis_factor(Vec3::zeros(), 2.0),
        Err(Error::ZeroVector { .. })
    ));
    assert!(Frustum::direction_length(Vec3::zeros(), 1.0, 1.0, 1.0).is_err());
}

#[test]
fn zero_scale_has_no_inverse() {
    let flat = Transform::scale_axes(1.0, 0.0, 1.0);
    assert!(flat.has_warning(WarningKind::ZeroScale));
    assert!(matches!(flat.ignore_warnings().inverse(), Err(Error::Singular(_))));
    assert!(matches!(
        (Transform::translate(Vec3::x()) * Transform::scale_uniform(0.0)).inverse(),
        Err(Error::Singular(_))
    ));
}

#[test]
fn operands_dispatch_legal_pairs() {
    let cube: Object = Cuboid::cube(1.0).ignore_warnings().into();
    let sphere: Object = Sphere::new(1.0).ignore_warnings().into();
    let shift = Transform::translate(Vec3::new(0.0, 0.0, 2.0));

    let union = Operand::apply(BinaryOp::Add, cube.clone().into(), sphere.clone().into()).unwrap();
    assert_eq!(union.into_object().unwrap(), cube.clone() + sphere.clone());

    let placed = Operand::apply(BinaryOp::Mul, shift.clone().into(), cube.clone().into()).unwrap();
    assert_eq!(placed.into_object().unwrap(), shift.clone() * cube.clone());

    let point = Operand::apply(BinaryOp::Mul, shift.into(), Vec3::zeros().into()).unwrap();
    assert_eq!(point, Operand::Vector(Vec3::new(0.0, 0.0, 2.0)));
}

#[test]
fn operands_reject_illegal_pairs() {
    let cube: Object = Cuboid::cube(1.0).ignore_warnings().into();
    let shift = Transform::translate(Vec3::x());

    let err = Operand::apply(BinaryOp::Mul, cube.clone().into(), shift.clone().into()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported operation: object * transform");

    let err = Operand::apply(BinaryOp::Sub, shift.clone().into(), shift.clone().into()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported operation: transform - transform");

    let err = Operand::from(shift).into_object().unwrap_err();
    assert_eq!(err.to_string(), "expected object, found transform");
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scadkit.toml");

    let mut config = Config::default().with_resolution(48);
    config.emit.simplify = true;
    config.save(&path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), config);

    std::fs::write(&path, "resolution = \"many\"").unwrap();
    assert!(matches!(Config::from_file(&path), Err(Error::Config(_))));
    assert!(matches!(
        Config::from_file(dir.path().join("missing.toml")),
        Err(Error::Io(_))
    ));
}
