//! The configuration tree handed to the resolver by the host.
//!
//! Hosts conventionally serialize their run configuration as XML or JSON;
//! the resolver never sees that. It only needs two capabilities: look up a
//! child by exact name and read text content. Any representation that maps
//! onto [`ConfigNode`] works, which keeps the resolver testable with
//! hand-built fixtures instead of parsed documents.

use serde_json::Value;

/// A named configuration element with optional text and ordered children.
///
/// The resolver treats this tree as read-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    text: Option<String>,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create an element with no text and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the text content (builder style, for fixtures and adapters).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element (builder style).
    #[must_use]
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text content, if any. Never trimmed here; callers decide.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Look up a child by exact, case-sensitive name.
    ///
    /// If siblings share a name, the first occurrence wins.
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Build a tree from a JSON value.
    ///
    /// Objects become child elements, scalars become text, and an array is
    /// equivalent to the comma-separated text form of its elements (so
    /// `{"Exclude": ["A","B"]}` and `{"Exclude": "A,B"}` resolve the same).
    /// `null` produces an element with no text.
    pub fn from_json(name: impl Into<String>, value: &Value) -> Self {
        let node = ConfigNode::new(name);
        match value {
            Value::Null => node,
            Value::String(text) => node.with_text(text),
            Value::Bool(flag) => node.with_text(flag.to_string()),
            Value::Number(number) => node.with_text(number.to_string()),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(",");
                node.with_text(joined)
            }
            Value::Object(members) => members.iter().fold(node, |parent, (key, child)| {
                parent.with_child(ConfigNode::from_json(key, child))
            }),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
