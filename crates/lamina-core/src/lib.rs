//! LAMINA core
//!
//! Central coordination for the panel renderer: configuration, the pure
//! rendering functions, and the [`Renderer`] driving the fetch, generate
//! and click lifecycle. All panel state lives on this side; the host
//! document is a stateless projection of it.

mod config;
mod error;
mod render;
mod renderer;

pub use config::PanelConfig;
pub use error::CoreError;
pub use render::{ACTIVE_CLASS, CONTENT_CLASS, DATA_TAB_ATTR, TAB_CLASS};
pub use renderer::Renderer;

// Re-export the building blocks so hosts depend on one crate.
pub use lamina_dom::{Document, DomError, DomOp, Element, Target};
pub use lamina_panel::{PanelError, PanelState, SelectionChange, Tab, TabDefinition, TabId, TabSet};
pub use lamina_source::{DocumentLoader, DocumentSource, SourceError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
