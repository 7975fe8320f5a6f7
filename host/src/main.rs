//! LAMINA host
//!
//! Thin command line host around the renderer: builds the page skeleton,
//! runs the initialization pipeline against a tab document, optionally
//! replays a sequence of button clicks, and emits the resulting page.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lamina_core::{
    init_logging, Document, Element, PanelConfig, Renderer, ACTIVE_CLASS, CONTENT_CLASS,
};

#[derive(Parser, Debug)]
#[command(name = "lamina", version, about = "Data-driven tab panel renderer")]
struct Cli {
    /// Tab document to load: a file path or an http(s) URL
    #[arg(default_value = "tabsContent.json")]
    document: String,

    /// Id of the container element receiving the tab buttons
    #[arg(long, default_value = "tabs")]
    tabs_container: String,

    /// Id of the container element receiving the content panels
    #[arg(long, default_value = "content")]
    content_container: String,

    /// Click this button id after initialization (repeatable, in order)
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,

    /// Write the final page here instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

/// Page skeleton the panel renders into: a stylesheet hiding inactive
/// panels and the two empty containers.
fn host_page(config: &PanelConfig) -> Document {
    let style = format!(
        ".{CONTENT_CLASS} {{ display: none; }} .{CONTENT_CLASS}.{ACTIVE_CLASS} {{ display: block; }}"
    );

    let mut document = Document::new();
    document.append_to_root(Element::new("style").with_text(style));
    document.append_to_root(Element::new("div").with_id(config.tabs_container.clone()));
    document.append_to_root(Element::new("div").with_id(config.content_container.clone()));
    document
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = PanelConfig {
        document: cli.document,
        tabs_container: cli.tabs_container,
        content_container: cli.content_container,
    };

    let renderer = Renderer::new(host_page(&config), config)?;
    renderer.run().await;

    for button in &cli.clicks {
        renderer.click(button);
    }

    let html = renderer.html();
    match &cli.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote rendered page");
        }
        None => println!("{html}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["lamina"]).unwrap();
        assert_eq!(cli.document, "tabsContent.json");
        assert_eq!(cli.tabs_container, "tabs");
        assert_eq!(cli.content_container, "content");
        assert!(cli.clicks.is_empty());
        assert!(cli.out.is_none());
    }

    #[test]
    fn test_cli_click_replay_order() {
        let cli =
            Cli::try_parse_from(["lamina", "tabs.json", "--click", "tab2", "--click", "tab1"])
                .unwrap();
        assert_eq!(cli.document, "tabs.json");
        assert_eq!(cli.clicks, vec!["tab2", "tab1"]);
    }

    #[test]
    fn test_host_page_has_both_containers() {
        let page = host_page(&PanelConfig::default());
        assert!(page.element_by_id("tabs").is_some());
        assert!(page.element_by_id("content").is_some());
    }

    #[test]
    fn test_host_page_stylesheet_survives_serialization() {
        let html = host_page(&PanelConfig::default()).to_html();
        assert!(html.contains(".tab-content { display: none; }"));
        assert!(html.contains(".tab-content.active { display: block; }"));
    }
}
