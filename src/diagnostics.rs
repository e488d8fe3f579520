// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Non-fatal diagnostics for degenerate or ambiguous input
//!
//! Constructors that accept questionable but usable input return a
//! [`Checked`] value instead of printing. Callers either inspect the warnings
//! or forward them to the `log` facade with [`Checked::report`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a non-fatal diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// From-to rotation between opposite vectors; the axis is arbitrary
    AmbiguousRotation,
    ZeroScale,
    ZeroSize,
    ZeroLength,
    ZeroRadius,
}

/// A diagnostic message with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A successfully constructed value together with the warnings it raised
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Checked<T> {
    value: T,
    warnings: Vec<Warning>,
}

impl<T> Checked<T> {
    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    pub fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }

    /// Log every warning at `warn` level and return the value
    pub fn report(self) -> T {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
        self.value
    }

    /// Drop the warnings without reporting them
    pub fn ignore_warnings(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
