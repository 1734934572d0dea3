//! Logic-less template rendering.
//!
//! Templates support exactly two constructs:
//!
//! - `{{path.to.value}}` — interpolates the value at a dotted path in the
//!   bindings, verbatim (terminal output, no escaping).
//! - `{{#name}} ... {{/name}}` — renders the enclosed fragment once per
//!   element of the array bound to `name`, with the element as the innermost
//!   lookup context.
//!
//! Everything else, embedded ANSI sequences included, passes through
//! byte-for-byte.
//!
//! # Error posture
//!
//! Parsing and rendering fail differently on purpose. Templates are fixed
//! literals owned by command handlers, so malformed syntax is a
//! construction-time [`RenderError`] from [`Template::parse`]. Rendering is
//! cosmetic output: an unresolvable path interpolates as the empty string
//! and a missing or non-array section iterates zero times, so one bad
//! binding never aborts the rest of the render.
//!
//! # Example
//!
//! ```rust
//! use fzm_render::Template;
//! use serde_json::json;
//!
//! let template = Template::parse("{{#items}}[{{name}}]{{/items}}").unwrap();
//! let output = template.render(&json!({"items": [{"name": "p"}, {"name": "q"}]}));
//! assert_eq!(output, "[p][q]");
//! ```

use std::io::{self, Write};

use serde_json::Value;

use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Var(String),
    Section { name: String, body: Vec<Node> },
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parses template source into a render-ready node tree.
    ///
    /// Fails on an unterminated `{{`, an empty placeholder, a section left
    /// unclosed at end of input, or a `{{/name}}` that does not close the
    /// innermost open section.
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        // Stack of open sections: (name, nodes accumulated before the open).
        let mut open: Vec<(String, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                current.push(Node::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                RenderError::TemplateError("unterminated '{{' placeholder".to_string())
            })?;
            let tag = after[..end].trim();
            rest = &after[end + 2..];

            if tag.is_empty() {
                return Err(RenderError::TemplateError(
                    "empty placeholder name".to_string(),
                ));
            }

            if let Some(name) = tag.strip_prefix('#') {
                open.push((name.trim().to_string(), std::mem::take(&mut current)));
            } else if let Some(name) = tag.strip_prefix('/') {
                let name = name.trim();
                match open.pop() {
                    Some((section, parent)) if section == name => {
                        let body = std::mem::replace(&mut current, parent);
                        current.push(Node::Section { name: section, body });
                    }
                    Some((section, _)) => {
                        return Err(RenderError::TemplateError(format!(
                            "'{{{{/{}}}}}' closes open section '{}'",
                            name, section
                        )));
                    }
                    None => {
                        return Err(RenderError::TemplateError(format!(
                            "'{{{{/{}}}}}' without matching open",
                            name
                        )));
                    }
                }
            } else {
                current.push(Node::Var(tag.to_string()));
            }
        }

        if !rest.is_empty() {
            current.push(Node::Text(rest.to_string()));
        }
        if let Some((section, _)) = open.last() {
            return Err(RenderError::TemplateError(format!(
                "unclosed section '{}'",
                section
            )));
        }

        Ok(Self { nodes: current })
    }

    /// Renders into a writer, emitting incrementally.
    ///
    /// Nothing is materialized up front, so a long command table streams
    /// straight into the output buffer.
    pub fn render_to<W: Write>(&self, out: &mut W, bindings: &Value) -> io::Result<()> {
        render_nodes(out, &self.nodes, &[bindings])
    }

    /// Renders to an owned string.
    pub fn render(&self, bindings: &Value) -> String {
        let mut buf = Vec::new();
        // Writes to a Vec are infallible.
        let _ = self.render_to(&mut buf, bindings);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Walks the node tree. `scopes` is the lookup chain, innermost first.
fn render_nodes<W: Write>(out: &mut W, nodes: &[Node], scopes: &[&Value]) -> io::Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => out.write_all(text.as_bytes())?,
            Node::Var(path) => {
                if let Some(value) = lookup(scopes, path) {
                    out.write_all(display_value(value).as_bytes())?;
                }
            }
            Node::Section { name, body } => {
                if let Some(Value::Array(items)) = lookup(scopes, name) {
                    for item in items {
                        let mut inner = Vec::with_capacity(scopes.len() + 1);
                        inner.push(item);
                        inner.extend_from_slice(scopes);
                        render_nodes(out, body, &inner)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Resolves a dotted path against the scope chain, innermost scope first.
fn lookup<'a>(scopes: &[&'a Value], path: &str) -> Option<&'a Value> {
    scopes.iter().find_map(|scope| resolve_path(scope, path))
}

/// Resolves a dotted path in a JSON value.
///
/// Supports nested objects (`user.name`) and array indices (`items.0`).
fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(arr) => arr.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Formats a JSON value for interpolation.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
