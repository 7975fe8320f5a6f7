//! The panel renderer
//!
//! Coordinates the whole panel lifecycle: fetch the tab document, decode
//! it, generate the buttons and content panels, wire the buttons, and from
//! then on translate clicks into selection changes. The renderer owns all
//! panel state; the host document only ever reflects it.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use lamina_dom::Document;
use lamina_panel::{PanelState, Tab, TabId};
use lamina_source::{DocumentLoader, DocumentSource};

use crate::config::PanelConfig;
use crate::render;
use crate::Result;

struct Inner {
    document: Document,
    state: PanelState,
    /// Buttons with a click responder attached
    wired: HashSet<TabId>,
    initialized: bool,
}

/// Renderer over one host document.
///
/// Cheap to clone; clones share the document and panel state.
pub struct Renderer {
    config: PanelConfig,
    loader: DocumentLoader,
    inner: Arc<RwLock<Inner>>,
}

impl Renderer {
    /// Create a renderer over a host document.
    ///
    /// The document should already contain the two containers named by the
    /// configuration; a missing container surfaces during initialization,
    /// not here.
    pub fn new(document: Document, config: PanelConfig) -> Result<Self> {
        let loader = DocumentLoader::new()?;

        Ok(Self {
            config,
            loader,
            inner: Arc::new(RwLock::new(Inner {
                document,
                state: PanelState::default(),
                wired: HashSet::new(),
                initialized: false,
            })),
        })
    }

    /// Run the initialization pipeline: fetch the tab document, decode it,
    /// generate the elements and wire the buttons.
    ///
    /// Any stage failing fails the whole pipeline. Elements appended before
    /// a generation failure stay in the document; no button is wired unless
    /// every stage succeeded.
    pub async fn initialize(&self) -> Result<()> {
        let source = DocumentSource::parse(&self.config.document)?;
        let body = self.loader.fetch(&source).await?;
        let set = self.loader.decode(&body)?;

        let state = PanelState::from_set(set);
        let ops = render::build(&state, &self.config);

        let mut inner = self.inner.write();
        inner.document.apply(&ops)?;
        inner.wired = state.tabs().iter().map(|tab| tab.id).collect();
        let tab_count = state.len();
        inner.state = state;
        inner.initialized = true;

        tracing::info!(tab_count, source = %source, "Panel initialized");

        Ok(())
    }

    /// Initialization boundary: run the pipeline and swallow any failure
    /// after a single diagnostic line. The document keeps whatever state
    /// the pipeline reached.
    pub async fn run(&self) {
        if let Err(e) = self.initialize().await {
            tracing::error!(error = %e, "Error loading tab content");
        }
    }

    /// Click responder for a generated tab button.
    ///
    /// There is no error path. Ids that never had a responder wired,
    /// re-clicks of the active tab, and markers whose target elements have
    /// gone missing all leave the panel state consistent and return
    /// without complaint.
    pub fn click(&self, button: &str) {
        let id: TabId = match button.parse() {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!(button = %button, "Click on unknown id ignored");
                return;
            }
        };

        let mut inner = self.inner.write();
        if !inner.wired.contains(&id) {
            tracing::debug!(button = %button, "Click on unwired button ignored");
            return;
        }

        let change = match inner.state.select_by_id(id) {
            Ok(Some(change)) => change,
            Ok(None) => return,
            Err(e) => {
                tracing::debug!(button = %button, error = %e, "Click dispatch failed");
                return;
            }
        };

        let ops = render::diff(&change);
        if let Err(e) = inner.document.apply(&ops) {
            tracing::debug!(button = %button, error = %e, "Click render failed");
            return;
        }

        tracing::debug!(tab = %change.to, "Tab activated");
    }

    /// Snapshot of the tab records in document order.
    pub fn tabs(&self) -> Vec<Tab> {
        self.inner.read().state.tabs().to_vec()
    }

    /// The currently selected tab, if any.
    pub fn active_tab(&self) -> Option<Tab> {
        self.inner.read().state.active_tab().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().initialized
    }

    /// Serialize the host document.
    pub fn html(&self) -> String {
        self.inner.read().document.to_html()
    }
}

impl Clone for Renderer {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            loader: self.loader.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use lamina_dom::Element;
    use scraper::{Html, Selector};

    const THREE_TABS: &str = r#"{
        "tabs": [
            { "name": "Home", "content": "Welcome home" },
            { "name": "Docs", "content": "Read the docs" },
            { "name": "About", "content": "About us" }
        ]
    }"#;

    fn host_page(config: &PanelConfig) -> Document {
        let mut document = Document::new();
        document.append_to_root(Element::new("div").with_id(config.tabs_container.clone()));
        document.append_to_root(Element::new("div").with_id(config.content_container.clone()));
        document
    }

    fn write_document(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("tabsContent.json");
        std::fs::write(&path, body).unwrap();
        path.display().to_string()
    }

    async fn initialized_renderer(body: &str) -> (tempfile::TempDir, Renderer) {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::new(write_document(&dir, body));
        let renderer = Renderer::new(host_page(&config), config).unwrap();
        renderer.initialize().await.unwrap();
        (dir, renderer)
    }

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    fn texts(html: &Html, css: &str) -> Vec<String> {
        html.select(&selector(css))
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[tokio::test]
    async fn test_initialize_generates_buttons_and_panels_in_order() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;
        let html = Html::parse_document(&renderer.html());

        assert_eq!(texts(&html, "button.tab"), vec!["Home", "Docs", "About"]);
        assert_eq!(
            texts(&html, "div.tab-content"),
            vec!["Welcome home", "Read the docs", "About us"]
        );

        let ids: Vec<_> = html
            .select(&selector("button.tab"))
            .filter_map(|el| el.value().attr("data-tab"))
            .collect();
        assert_eq!(ids, vec!["tab1", "tab2", "tab3"]);
        let panel_ids: Vec<_> = html
            .select(&selector("div.tab-content"))
            .filter_map(|el| el.value().attr("id"))
            .collect();
        assert_eq!(panel_ids, vec!["tab1", "tab2", "tab3"]);

        assert!(renderer.is_initialized());
        assert_eq!(renderer.tabs().len(), 3);
    }

    #[tokio::test]
    async fn test_first_pair_is_active_after_initialize() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;
        let html = Html::parse_document(&renderer.html());

        assert_eq!(texts(&html, "button.tab.active"), vec!["Home"]);
        assert_eq!(texts(&html, "div.tab-content.active"), vec!["Welcome home"]);
        assert_eq!(renderer.active_tab().map(|tab| tab.name), Some("Home".to_string()));
    }

    #[tokio::test]
    async fn test_click_moves_the_active_pair() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;

        let sequence = [
            ("tab3", "About", "About us"),
            ("tab1", "Home", "Welcome home"),
            ("tab2", "Docs", "Read the docs"),
        ];
        for (button, name, content) in sequence {
            renderer.click(button);

            let html = Html::parse_document(&renderer.html());
            assert_eq!(texts(&html, "button.tab.active"), vec![name]);
            assert_eq!(texts(&html, "div.tab-content.active"), vec![content]);
            assert_eq!(html.select(&selector(".active")).count(), 2);
            assert_eq!(html.select(&selector("button.tab")).count(), 3);
        }
    }

    #[tokio::test]
    async fn test_reclicking_the_active_tab_changes_nothing() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;

        renderer.click("tab2");
        let before = renderer.html();
        renderer.click("tab2");
        assert_eq!(renderer.html(), before);
    }

    #[tokio::test]
    async fn test_click_on_unknown_id_is_a_noop() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;

        renderer.click("tab2");
        let before = renderer.html();

        renderer.click("tab9");
        renderer.click("tab0");
        renderer.click("sidebar");
        renderer.click("");

        // Non-canonical spellings of a present id must not alias it.
        renderer.click("tab01");
        renderer.click("tab+1");

        assert_eq!(renderer.html(), before);
        assert_eq!(renderer.active_tab().map(|tab| tab.name), Some("Docs".to_string()));
    }

    #[tokio::test]
    async fn test_click_with_missing_panel_leaves_no_content_active() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;

        // Rebuild the host document without the second content panel, as if
        // the page were tampered with behind the renderer's back.
        {
            let mut inner = renderer.inner.write();
            let mut tabs_container = Element::new("div").with_id("tabs");
            let mut content_container = Element::new("div").with_id("content");
            for tab in inner.state.tabs() {
                tabs_container = tabs_container.with_child(render::button_element(tab));
                if tab.id.index() != 1 {
                    content_container = content_container.with_child(render::panel_element(tab));
                }
            }
            let mut document = Document::new();
            document.append_to_root(tabs_container);
            document.append_to_root(content_container);
            inner.document = document;
        }

        renderer.click("tab2");

        let html = Html::parse_document(&renderer.html());
        assert_eq!(texts(&html, "button.tab.active"), vec!["Docs"]);
        assert!(html.select(&selector("div.tab-content.active")).next().is_none());

        // Selecting a pair that is fully present recovers the marker.
        renderer.click("tab3");
        let html = Html::parse_document(&renderer.html());
        assert_eq!(texts(&html, "button.tab.active"), vec!["About"]);
        assert_eq!(texts(&html, "div.tab-content.active"), vec!["About us"]);
    }

    #[tokio::test]
    async fn test_empty_tab_set_initializes_to_an_empty_panel() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::new(write_document(&dir, r#"{ "tabs": [] }"#));
        let renderer = Renderer::new(host_page(&config), config).unwrap();

        renderer.run().await;

        assert!(renderer.is_initialized());
        assert!(renderer.tabs().is_empty());
        assert!(renderer.active_tab().is_none());

        let html = Html::parse_document(&renderer.html());
        assert!(html.select(&selector(".tab")).next().is_none());
        assert!(html.select(&selector(".tab-content")).next().is_none());

        renderer.click("tab1");
        assert!(renderer.active_tab().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_swallowed_and_generates_nothing() {
        let config = PanelConfig::new("/nonexistent/tabsContent.json");
        let renderer = Renderer::new(host_page(&config), config).unwrap();

        renderer.run().await;

        assert!(!renderer.is_initialized());
        assert!(renderer.tabs().is_empty());
        let html = Html::parse_document(&renderer.html());
        assert!(html.select(&selector(".tab")).next().is_none());
    }

    #[tokio::test]
    async fn test_decode_failure_fails_initialization() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::new(write_document(&dir, r#"{ "tabs": [ { "name": "Home" } ] }"#));
        let renderer = Renderer::new(host_page(&config), config).unwrap();

        let err = renderer.initialize().await.unwrap_err();
        assert!(matches!(err, CoreError::Source(_)));
        assert!(!renderer.is_initialized());
    }

    #[tokio::test]
    async fn test_missing_content_container_fails_midway() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::new(write_document(&dir, THREE_TABS));
        let mut document = Document::new();
        document.append_to_root(Element::new("div").with_id("tabs"));
        let renderer = Renderer::new(document, config).unwrap();

        let err = renderer.initialize().await.unwrap_err();
        assert!(matches!(err, CoreError::Dom(_)));
        assert!(!renderer.is_initialized());

        // The first button went in before generation hit the missing
        // container and it stays there.
        let html = Html::parse_document(&renderer.html());
        assert_eq!(texts(&html, "button.tab"), vec!["Home"]);

        // Nothing got wired, so clicks stay inert.
        renderer.click("tab1");
        assert!(renderer.active_tab().is_none());
    }

    #[tokio::test]
    async fn test_markup_in_tab_fields_stays_inert() {
        let dir = tempfile::tempdir().unwrap();
        let body = r#"{
            "tabs": [
                { "name": "<b>Bold</b>", "content": "<script>alert('x')</script>" }
            ]
        }"#;
        let config = PanelConfig::new(write_document(&dir, body));
        let renderer = Renderer::new(host_page(&config), config).unwrap();
        renderer.initialize().await.unwrap();

        let html_str = renderer.html();
        assert!(html_str.contains("&lt;script&gt;"));
        assert!(!html_str.contains("<script>"));

        let html = Html::parse_document(&html_str);
        assert_eq!(texts(&html, "button.tab"), vec!["<b>Bold</b>"]);
        assert_eq!(
            texts(&html, "div.tab-content"),
            vec!["<script>alert('x')</script>"]
        );
    }

    #[tokio::test]
    async fn test_clones_share_panel_state() {
        let (_dir, renderer) = initialized_renderer(THREE_TABS).await;
        let clone = renderer.clone();

        clone.click("tab3");

        assert_eq!(renderer.active_tab().map(|tab| tab.name), Some("About".to_string()));
    }
}
