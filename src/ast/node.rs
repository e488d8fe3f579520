// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SCAD AST node definitions

use crate::error::{Error, Result};
use crate::utils::{Tree, Vec3};
use serde::{Deserialize, Serialize};

/// A parameter value as it appears in SCAD source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Render the value as SCAD source text.
    ///
    /// Fails for empty lists and for numbers SCAD has no literal for.
    pub fn render(&self) -> Result<String> {
        match self {
            Value::Number(n) => {
                if !n.is_finite() {
                    return Err(Error::NonFiniteValue(*n));
                }
                // -0 prints as 0
                if *n == 0.0 {
                    Ok("0".to_string())
                } else {
                    Ok(n.to_string())
                }
            }
            Value::Text(s) => Ok(format!("\"{}\"", escape(s))),
            Value::List(items) => {
                if items.is_empty() {
                    return Err(Error::EmptyList);
                }
                let rendered = items
                    .iter()
                    .map(Value::render)
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("[{}]", rendered.join(", ")))
            }
        }
    }
}

fn escape(s: &str) -> String {
    // Backslash first, so the escapes added below are not doubled
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::List(v.iter().map(|c| Value::Number(*c)).collect())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// A SCAD statement: `id(params, key = value) children`, optionally commented.
///
/// A node without an identifier carries no parameters; it only groups its
/// children or, when childless, renders as the empty statement `;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScadNode {
    id: Option<String>,
    params: Vec<Value>,
    kw_params: Vec<(String, Value)>,
    children: Vec<ScadNode>,
    comment: Option<String>,
}

impl ScadNode {
    /// Create a validated node
    pub fn new(
        id: Option<&str>,
        params: Vec<Value>,
        kw_params: Vec<(String, Value)>,
        children: Vec<ScadNode>,
    ) -> Result<Self> {
        let node = Self {
            id: id.map(str::to_string),
            params,
            kw_params,
            children,
            comment: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Check the identifier rules; builder methods defer this to emission
    fn validate(&self) -> Result<()> {
        match self.id.as_deref() {
            None => {
                if !self.params.is_empty() {
                    return Err(Error::InvalidNode(
                        "an empty node cannot have parameters".into(),
                    ));
                }
                if !self.kw_params.is_empty() {
                    return Err(Error::InvalidNode(
                        "an empty node cannot have keyword parameters".into(),
                    ));
                }
            }
            Some("") => {
                return Err(Error::InvalidNode("id must be a non-empty string".into()));
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Start a node for a known module name such as `translate` or `cube`
    pub fn call(id: &'static str) -> Self {
        Self {
            id: Some(id.to_string()),
            params: Vec::new(),
            kw_params: Vec::new(),
            children: Vec::new(),
            comment: None,
        }
    }

    /// The empty statement `;`
    pub fn empty() -> Self {
        Self {
            id: None,
            params: Vec::new(),
            kw_params: Vec::new(),
            children: Vec::new(),
            comment: None,
        }
    }

    /// An identifier-less block `{ ... }`
    pub fn group(children: Vec<ScadNode>) -> Self {
        Self {
            children,
            ..Self::empty()
        }
    }

    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn kw(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.kw_params.push((key.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: ScadNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = ScadNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Wrap an optional target as the single child, if present
    pub fn onto(self, target: Option<ScadNode>) -> Self {
        match target {
            Some(target) => self.child(target),
            None => self,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn kw_params(&self) -> &[(String, Value)] {
        &self.kw_params
    }

    pub fn children(&self) -> &[ScadNode] {
        &self.children
    }

    pub fn get_comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.children.is_empty()
    }

    pub fn replace_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Remove the comment, and with `recursive` those of all descendants
    pub fn clear_comment(mut self, recursive: bool) -> Self {
        self.comment = None;
        if recursive {
            self.children = self
                .children
                .into_iter()
                .map(|child| child.clear_comment(true))
                .collect();
        }
        self
    }

    /// Join `prepend`, the current comment, and `append` with `sep`
    pub fn comment(self, prepend: Option<&str>, append: Option<&str>, sep: &str) -> Self {
        let parts: Vec<&str> = [prepend, self.comment.as_deref(), append]
            .into_iter()
            .flatten()
            .collect();
        let comment = if parts.is_empty() {
            None
        } else {
            Some(parts.join(sep))
        };
        self.replace_comment(comment)
    }

    /// Prepend a line to the comment
    pub fn commented(self, text: &str) -> Self {
        self.comment(Some(text), None, "\n")
    }

    /// Head of the statement without terminator, e.g. `cylinder(4, r = 0.5)`.
    ///
    /// Fails for an empty identifier and for parameters on an id-less node.
    pub fn head(&self) -> Result<String> {
        self.validate()?;
        let Some(id) = &self.id else {
            return Ok(String::new());
        };

        let mut parts = self
            .params
            .iter()
            .map(Value::render)
            .collect::<Result<Vec<_>>>()?;
        for (key, value) in &self.kw_params {
            parts.push(format!("{} = {}", key, value.render()?));
        }

        Ok(format!("{}({})", id, parts.join(", ")))
    }

    pub fn to_tree(&self) -> Result<Tree> {
        let children = self
            .children
            .iter()
            .map(ScadNode::to_tree)
            .collect::<Result<Vec<_>>>()?;
        Ok(Tree::new(self.head()?, children))
    }
}
