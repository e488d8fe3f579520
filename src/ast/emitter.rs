// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SCAD source emitter

use super::ScadNode;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Layout options for emitted source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Added once per nesting level
    pub indent: String,
    /// Prefix of every line
    pub top_indent: String,
    /// Join everything into one line; implies no comments
    pub inline: bool,
    /// Write single-child nodes as `a() b();` instead of a block
    pub simplify: bool,
    /// Emit node comments as `//` lines
    pub comments: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            top_indent: String::new(),
            inline: false,
            simplify: false,
            comments: true,
        }
    }
}

impl EmitOptions {
    pub fn inline() -> Self {
        Self {
            inline: true,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: &str, top_indent: &str) -> Self {
        self.indent = indent.to_string();
        self.top_indent = top_indent.to_string();
        self
    }

    pub fn simplified(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}

impl ScadNode {
    /// Render this node and its children as SCAD source
    pub fn to_code(&self, options: &EmitOptions) -> Result<String> {
        if options.inline {
            Ok(self.lines("", "", options.simplify, false)?.join(" "))
        } else {
            Ok(self
                .lines(&options.indent, &options.top_indent, options.simplify, options.comments)?
                .join("\n"))
        }
    }

    fn lines(
        &self,
        indent: &str,
        top_indent: &str,
        simplify: bool,
        comments: bool,
    ) -> Result<Vec<String>> {
        let mut result = Vec::new();

        if comments {
            if let Some(comment) = self.get_comment() {
                for line in comment.split('\n') {
                    result.push(format!("{}// {}", top_indent, line));
                }
            }
        }

        let mut head = self.head()?;
        let foot = if self.children().is_empty() {
            head.push(';');
            None
        } else if simplify && self.children().len() == 1 {
            None
        } else {
            if !head.is_empty() {
                head.push(' ');
            }
            head.push('{');
            Some("}")
        };
        result.push(format!("{}{}", top_indent, head));

        for child in self.children() {
            for line in child.lines(indent, "", simplify, comments)? {
                result.push(format!("{}{}{}", top_indent, indent, line));
            }
        }

        if let Some(foot) = foot {
            result.push(format!("{}{}", top_indent, foot));
        }

        Ok(result)
    }
}
