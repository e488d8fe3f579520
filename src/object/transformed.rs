// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

use super::Object;
use crate::ast::ScadNode;
use crate::transform::Transform;
use crate::utils::Tree;
use serde::Serialize;
use std::ops::Mul;

/// An object with a transform applied to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformed {
    transform: Transform,
    object: Box<Object>,
}

impl Transformed {
    pub fn new(transform: Transform, object: Object) -> Self {
        Self {
            transform,
            object: Box::new(object),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn to_scad(&self) -> ScadNode {
        self.transform.render_onto(Some(self.object.to_scad()))
    }

    pub fn to_tree(&self) -> Tree {
        Tree::new(
            "Transformed object",
            vec![self.transform.to_tree(), self.object.to_tree()],
        )
    }
}

impl Mul<Object> for Transform {
    type Output = Object;

    /// Apply the transform. An already transformed object absorbs the new
    /// transform into its own instead of gaining a second wrapper.
    fn mul(self, object: Object) -> Object {
        let transformed = match object {
            Object::Transformed(inner) => Transformed {
                transform: self * inner.transform,
                object: inner.object,
            },
            other => Transformed::new(self, other),
        };
        Object::Transformed(transformed)
    }
}

impl Mul<&Object> for &Transform {
    type Output = Object;

    fn mul(self, object: &Object) -> Object {
        self.clone() * object.clone()
    }
}
