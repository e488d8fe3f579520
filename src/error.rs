// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types

use thiserror::Error;

/// Errors raised while building, composing, or emitting a scene
#[derive(Debug, Error)]
pub enum Error {
    #[error("{label} may not be zero-length")]
    ZeroVector { label: &'static str },

    #[error("invalid SCAD node: {0}")]
    InvalidNode(String),

    #[error("unsupported operation: {lhs} {op} {rhs}")]
    UnsupportedOperation {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value is an empty list")]
    EmptyList,

    #[error("value {0} cannot be represented in SCAD source")]
    NonFiniteValue(f64),

    #[error("transform is not invertible: {0}")]
    Singular(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
