// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Debug trees for scene values

use std::fmt;

/// A labelled tree node; every node, not only leaves, carries a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub label: String,
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn new(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }

    /// Format the tree as one line per node.
    ///
    /// Without `indent`, children are prefixed with a line drawing of the tree
    /// structure; otherwise each level adds one copy of `indent`. Every line
    /// starts with `top_indent`.
    pub fn lines(&self, indent: Option<&str>, top_indent: &str) -> Vec<String> {
        let mut result = vec![format!("{}{}", top_indent, self.label)];

        match indent {
            None => {
                let last = self.children.len().saturating_sub(1);
                for (index, child) in self.children.iter().enumerate() {
                    let (first_prefix, rest_prefix) = if index == last {
                        ("'-- ", "    ")
                    } else {
                        ("|-- ", "|   ")
                    };
                    for (line_index, line) in child.lines(None, "").into_iter().enumerate() {
                        let prefix = if line_index == 0 { first_prefix } else { rest_prefix };
                        result.push(format!("{}{}{}", top_indent, prefix, line));
                    }
                }
            }
            Some(indent) => {
                for child in &self.children {
                    for line in child.lines(Some(indent), "") {
                        result.push(format!("{}{}{}", top_indent, indent, line));
                    }
                }
            }
        }

        result
    }

    pub fn format(&self, indent: Option<&str>, top_indent: &str) -> String {
        self.lines(indent, top_indent).join("\n")
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(None, ""))
    }
}
