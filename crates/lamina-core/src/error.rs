//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Panel error: {0}")]
    Panel(#[from] lamina_panel::PanelError),

    #[error("Document error: {0}")]
    Dom(#[from] lamina_dom::DomError),

    #[error("Source error: {0}")]
    Source(#[from] lamina_source::SourceError),
}
