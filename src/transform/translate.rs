// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

use crate::ast::ScadNode;
use crate::utils::math::format_vector;
use crate::utils::{Mat4, Vec3};
use serde::Serialize;
use std::fmt;

/// Translation by a fixed offset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translate {
    vector: Vec3,
}

impl Translate {
    pub fn new(vector: Vec3) -> Self {
        Self { vector }
    }

    pub fn vector(&self) -> &Vec3 {
        &self.vector
    }

    pub fn inverse(&self) -> Self {
        Self::new(-self.vector)
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.vector)
    }

    pub fn render_onto(&self, target: Option<ScadNode>) -> ScadNode {
        ScadNode::call("translate").param(self.vector).onto(target)
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Translate by {}", format_vector(&self.vector))
    }
}
