// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CSG combinators and the object operators
//!
//! `+` is union, `*` intersection, and `-` difference. Union and
//! intersection merge operands of their own kind, in either position, so
//! they stay associative. Difference only absorbs further subtrahends on
//! the left: `(a - b) - c` has three children, `a - (b - c)` nests.

use super::Object;
use crate::ast::ScadNode;
use crate::utils::Tree;
use serde::Serialize;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CsgKind {
    Union,
    Intersection,
    Difference,
}

impl CsgKind {
    /// SCAD module name
    pub fn id(self) -> &'static str {
        match self {
            CsgKind::Union => "union",
            CsgKind::Intersection => "intersection",
            CsgKind::Difference => "difference",
        }
    }
}

impl fmt::Display for CsgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CsgKind::Union => "Union",
            CsgKind::Intersection => "Intersection",
            CsgKind::Difference => "Difference",
        };
        write!(f, "{}", label)
    }
}

/// A combinator over an ordered list of objects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Csg {
    kind: CsgKind,
    children: Vec<Object>,
}

impl Csg {
    pub fn new(kind: CsgKind, children: Vec<Object>) -> Self {
        Self { kind, children }
    }

    /// The identity element of the operator
    pub fn empty(kind: CsgKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> CsgKind {
        self.kind
    }

    pub fn children(&self) -> &[Object] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Object> {
        self.children
    }

    pub fn to_scad(&self) -> ScadNode {
        ScadNode::call(self.kind.id()).children_from(self.children.iter().map(Object::to_scad))
    }

    pub fn to_tree(&self) -> Tree {
        Tree::new(
            self.kind.to_string(),
            self.children.iter().map(Object::to_tree).collect(),
        )
    }
}

/// Combine two objects under a flattening operator
fn merge(kind: CsgKind, lhs: Object, rhs: Object) -> Object {
    let csg = match (lhs, rhs) {
        (Object::Csg(mut a), Object::Csg(b)) if a.kind == kind && b.kind == kind => {
            a.children.extend(b.children);
            a
        }
        (Object::Csg(mut a), rhs) if a.kind == kind => {
            a.children.push(rhs);
            a
        }
        // A plain left operand must still defer to a combinator on the right
        (lhs, Object::Csg(mut b)) if b.kind == kind => {
            b.children.insert(0, lhs);
            b
        }
        (lhs, rhs) => Csg::new(kind, vec![lhs, rhs]),
    };
    Object::Csg(csg)
}

impl Add for Object {
    type Output = Object;

    fn add(self, rhs: Object) -> Object {
        merge(CsgKind::Union, self, rhs)
    }
}

impl Mul for Object {
    type Output = Object;

    fn mul(self, rhs: Object) -> Object {
        merge(CsgKind::Intersection, self, rhs)
    }
}

impl Sub for Object {
    type Output = Object;

    fn sub(self, rhs: Object) -> Object {
        match (self, rhs) {
            (Object::Csg(mut a), rhs)
                if a.kind == CsgKind::Difference && !rhs.is_csg(CsgKind::Difference) =>
            {
                a.children.push(rhs);
                Object::Csg(a)
            }
            (lhs, rhs) => Object::Csg(Csg::new(CsgKind::Difference, vec![lhs, rhs])),
        }
    }
}

macro_rules! impl_ref_op {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<&Object> for &Object {
                type Output = Object;

                fn $method(self, rhs: &Object) -> Object {
                    self.clone().$method(rhs.clone())
                }
            }
        )*
    };
}

impl_ref_op!(Add::add, Mul::mul, Sub::sub);

impl Sum for Object {
    /// Union of all objects; the empty union for an empty iterator
    fn sum<I: Iterator<Item = Object>>(iter: I) -> Object {
        iter.fold(Object::empty(CsgKind::Union), |acc, object| acc + object)
    }
}

impl Product for Object {
    /// Intersection of all objects; the empty intersection for an empty
    /// iterator
    fn product<I: Iterator<Item = Object>>(iter: I) -> Object {
        iter.fold(Object::empty(CsgKind::Intersection), |acc, object| acc * object)
    }
}
