//! LAMINA document sources
//!
//! Resolves where the panel document lives (file path or http(s) URL) and
//! fetches and decodes it in explicit stages.

mod error;
mod loader;
mod source;

pub use error::SourceError;
pub use loader::DocumentLoader;
pub use source::DocumentSource;

pub type Result<T> = std::result::Result<T, SourceError>;
