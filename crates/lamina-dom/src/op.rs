//! DOM mutation operations
//!
//! Render output is a sequence of ops; applying them to a document is the
//! only way the renderer touches the page. Ops serialize, so a host view
//! layer can consume the same stream as JSON.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Locates an element for a class mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Match on element id
    Id(String),
    /// Match on attribute equality
    Attr { name: String, value: String },
}

impl Target {
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attr {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{}", id),
            Target::Attr { name, value } => write!(f, "[{}=\"{}\"]", name, value),
        }
    }
}

/// One DOM mutation produced by a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomOp {
    /// Append a fully built element into the container with id `parent`
    Append { parent: String, element: Element },
    /// Add a class to the element located by `target`
    AddClass { target: Target, class: String },
    /// Remove a class from the element located by `target`
    RemoveClass { target: Target, class: String },
}
