//! Panel rendering
//!
//! Pure functions from panel state to document mutations. `build`
//! materializes the full panel once after the document is decoded; `diff`
//! moves the active marker after a selection change. Neither touches a
//! document itself, they only describe the mutations.

use lamina_dom::{DomOp, Element, Target};
use lamina_panel::{PanelState, SelectionChange, Tab};

use crate::config::PanelConfig;

/// Class carried by every generated tab button.
pub const TAB_CLASS: &str = "tab";
/// Class carried by every generated content panel.
pub const CONTENT_CLASS: &str = "tab-content";
/// Marker class of the selected button and its panel.
pub const ACTIVE_CLASS: &str = "active";
/// Button attribute naming the content panel it controls.
pub const DATA_TAB_ATTR: &str = "data-tab";

/// Build the button element for one tab.
pub fn button_element(tab: &Tab) -> Element {
    let mut button = Element::new("button")
        .with_class(TAB_CLASS)
        .with_attr(DATA_TAB_ATTR, tab.id.to_string())
        .with_text(tab.name.clone());
    if tab.active {
        button.add_class(ACTIVE_CLASS);
    }
    button
}

/// Build the content panel element for one tab.
pub fn panel_element(tab: &Tab) -> Element {
    let mut panel = Element::new("div")
        .with_id(tab.id.to_string())
        .with_class(CONTENT_CLASS)
        .with_text(tab.content.clone());
    if tab.active {
        panel.add_class(ACTIVE_CLASS);
    }
    panel
}

/// Materialize the whole panel.
///
/// For each tab in document order, append its button to the tabs container
/// and its content panel to the content container, with the active marker
/// already in place. An empty state builds nothing.
pub fn build(state: &PanelState, config: &PanelConfig) -> Vec<DomOp> {
    let mut ops = Vec::with_capacity(state.len() * 2);

    for tab in state.tabs() {
        ops.push(DomOp::Append {
            parent: config.tabs_container.clone(),
            element: button_element(tab),
        });
        ops.push(DomOp::Append {
            parent: config.content_container.clone(),
            element: panel_element(tab),
        });
    }

    ops
}

/// Move the active marker after a selection change.
///
/// Removals come first so a change never shows two active pairs, then the
/// marker is added to the new button and its panel. Buttons are addressed
/// through their `data-tab` attribute, panels through their id.
pub fn diff(change: &SelectionChange) -> Vec<DomOp> {
    let mut ops = Vec::with_capacity(4);

    if let Some(from) = change.from {
        ops.push(DomOp::RemoveClass {
            target: Target::attr(DATA_TAB_ATTR, from.to_string()),
            class: ACTIVE_CLASS.to_string(),
        });
        ops.push(DomOp::RemoveClass {
            target: Target::id(from.to_string()),
            class: ACTIVE_CLASS.to_string(),
        });
    }

    ops.push(DomOp::AddClass {
        target: Target::attr(DATA_TAB_ATTR, change.to.to_string()),
        class: ACTIVE_CLASS.to_string(),
    });
    ops.push(DomOp::AddClass {
        target: Target::id(change.to.to_string()),
        class: ACTIVE_CLASS.to_string(),
    });

    ops
}
