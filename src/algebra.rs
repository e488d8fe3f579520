// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dynamically typed operands
//!
//! The operator impls on [`Transform`] and [`Object`] only exist for legal
//! pairs, so misuse in Rust code fails to compile. Scenes assembled at
//! runtime (from scripts or user input) go through [`Operand::apply`],
//! which reports unsupported pairs as [`Error::UnsupportedOperation`].

use crate::error::{Error, Result};
use crate::object::Object;
use crate::transform::Transform;
use crate::utils::Vec3;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Operand {
    Vector(Vec3),
    Transform(Transform),
    Object(Object),
}

impl Operand {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Transform(_) => "transform",
            Operand::Object(_) => "object",
        }
    }

    pub fn apply(op: BinaryOp, lhs: Operand, rhs: Operand) -> Result<Operand> {
        let result = match (op, lhs, rhs) {
            (BinaryOp::Add, Operand::Object(a), Operand::Object(b)) => Operand::Object(a + b),
            (BinaryOp::Sub, Operand::Object(a), Operand::Object(b)) => Operand::Object(a - b),
            (BinaryOp::Mul, Operand::Object(a), Operand::Object(b)) => Operand::Object(a * b),
            (BinaryOp::Mul, Operand::Transform(a), Operand::Transform(b)) => {
                Operand::Transform(a * b)
            }
            (BinaryOp::Mul, Operand::Transform(t), Operand::Object(o)) => Operand::Object(t * o),
            (BinaryOp::Mul, Operand::Transform(t), Operand::Vector(v)) => Operand::Vector(t * v),
            (BinaryOp::Add, Operand::Vector(a), Operand::Vector(b)) => Operand::Vector(a + b),
            (BinaryOp::Sub, Operand::Vector(a), Operand::Vector(b)) => Operand::Vector(a - b),
            (op, lhs, rhs) => {
                return Err(Error::UnsupportedOperation {
                    op: op.symbol(),
                    lhs: lhs.kind_name(),
                    rhs: rhs.kind_name(),
                })
            }
        };
        Ok(result)
    }

    pub fn into_object(self) -> Result<Object> {
        match self {
            Operand::Object(object) => Ok(object),
            other => Err(Error::TypeMismatch {
                expected: "object",
                found: other.kind_name(),
            }),
        }
    }
}

impl From<Vec3> for Operand {
    fn from(vector: Vec3) -> Self {
        Operand::Vector(vector)
    }
}

impl From<Transform> for Operand {
    fn from(transform: Transform) -> Self {
        Operand::Transform(transform)
    }
}

impl From<Object> for Operand {
    fn from(object: Object) -> Self {
        Operand::Object(object)
    }
}
