// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Utility modules

pub mod math;
pub mod tree;

pub use math::{Mat4, Vec3, VectorExt};
pub use tree::Tree;
