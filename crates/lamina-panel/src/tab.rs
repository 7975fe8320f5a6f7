//! Tab records and the fetched document shape
//!
//! A tab pairs a generated button with a generated content panel through a
//! shared positional identifier (`tab1`, `tab2`, ...).

use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::Result;

/// One named unit of content supplied by the panel document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDefinition {
    /// Display string for the tab button
    pub name: String,
    /// Plain text rendered as the tab body
    pub content: String,
}

/// The fetched document: an ordered sequence of tab definitions.
///
/// Order is significant. It fixes rendering order and the default-active
/// tab (index 0). Unknown fields in the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSet {
    pub tabs: Vec<TabDefinition>,
}

impl TabSet {
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Positional identifier linking a button to its content panel.
///
/// Rendered as `tab<N>` with N 1-based: the button carries it in its
/// `data-tab` attribute, the panel carries it as its element id. Only the
/// canonical rendering parses back; every other spelling is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TabId(usize);

impl TabId {
    /// Id for the tab at a 0-based position.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 0-based position of the tab this id names.
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// 1-based position as rendered.
    pub fn position(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tab{}", self.0)
    }
}

impl std::str::FromStr for TabId {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("tab")
            .ok_or_else(|| PanelError::InvalidId(s.to_string()))?;
        // Canonical ids only: bare ASCII digits, no sign, no leading zero.
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PanelError::InvalidId(s.to_string()));
        }
        let position: usize = digits
            .parse()
            .map_err(|_| PanelError::InvalidId(s.to_string()))?;
        Ok(Self(position))
    }
}

impl From<TabId> for String {
    fn from(id: TabId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TabId {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A rendered tab: one entry of the panel's ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Positional identifier shared by button and panel
    pub id: TabId,
    /// Button label
    pub name: String,
    /// Panel body text
    pub content: String,
    /// Whether this tab/content pair carries the active marker
    pub active: bool,
}

impl Tab {
    /// Build the record for a definition at a 0-based position.
    ///
    /// Records start inactive; [`PanelState::from_set`](crate::PanelState)
    /// decides the initial selection.
    pub fn from_definition(index: usize, definition: TabDefinition) -> Self {
        Self {
            id: TabId::from_index(index),
            name: definition.name,
            content: definition.content,
            active: false,
        }
    }
}
