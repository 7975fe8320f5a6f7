//! Renderer configuration

use serde::{Deserialize, Serialize};

/// Where the tab document comes from and where the panel lands.
///
/// The defaults match the stock host page: the document sits next to the
/// page as `tabsContent.json`, buttons go into `#tabs` and content panels
/// into `#content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Tab document location: a file path or an http(s) URL
    pub document: String,
    /// Id of the container element receiving the tab buttons
    pub tabs_container: String,
    /// Id of the container element receiving the content panels
    pub content_container: String,
}

impl PanelConfig {
    /// Configuration for a custom document location with the stock
    /// container ids.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            document: "tabsContent.json".to_string(),
            tabs_container: "tabs".to_string(),
            content_container: "content".to_string(),
        }
    }
}
