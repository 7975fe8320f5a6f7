//! Panel selection state
//!
//! The collection is created once from the fetched document and never
//! grows or shrinks afterwards; only the active marker moves.

use crate::error::PanelError;
use crate::tab::{Tab, TabId, TabSet};
use crate::Result;

/// One selection transition, consumed by the render diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Previously active tab, if any
    pub from: Option<TabId>,
    /// Newly active tab
    pub to: TabId,
}

/// Ordered collection of tab records with a single-valued selection.
///
/// Exactly one tab is active after initialization of a non-empty panel
/// and after every selection; an empty panel has no selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    tabs: Vec<Tab>,
}

impl PanelState {
    /// Build the collection from a fetched document, marking the first
    /// tab active.
    pub fn from_set(set: TabSet) -> Self {
        let mut tabs: Vec<Tab> = set
            .tabs
            .into_iter()
            .enumerate()
            .map(|(index, definition)| Tab::from_definition(index, definition))
            .collect();

        if let Some(first) = tabs.first_mut() {
            first.active = true;
        }

        Self { tabs }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Look up a tab by its positional identifier.
    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(id.index())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.active)
    }

    /// Move the selection to the tab at `index`.
    ///
    /// Selecting the already-active tab reports no change. Every other
    /// successful call deactivates the previous tab and activates the new
    /// one in a single transition.
    pub fn select(&mut self, index: usize) -> Result<Option<SelectionChange>> {
        if index >= self.tabs.len() {
            return Err(PanelError::OutOfRange {
                index,
                len: self.tabs.len(),
            });
        }

        let previous = self.active_index();
        if previous == Some(index) {
            return Ok(None);
        }

        if let Some(prev) = previous {
            self.tabs[prev].active = false;
        }
        self.tabs[index].active = true;

        let change = SelectionChange {
            from: previous.map(TabId::from_index),
            to: TabId::from_index(index),
        };

        tracing::debug!(
            from = ?change.from.map(|id| id.to_string()),
            to = %change.to,
            "Panel selection changed"
        );

        Ok(Some(change))
    }

    /// Id-keyed variant of [`select`](Self::select), used by click dispatch.
    pub fn select_by_id(&mut self, id: TabId) -> Result<Option<SelectionChange>> {
        self.select(id.index())
    }
}
