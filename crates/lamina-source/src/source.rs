//! Document sources
//!
//! The panel document lives either next to the host (a file path) or
//! behind http(s). Other schemes are rejected up front.

use std::path::PathBuf;

use url::Url;

use crate::error::SourceError;
use crate::Result;

/// Where the panel document is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local file path
    File(PathBuf),
    /// http(s) URL
    Url(Url),
}

impl DocumentSource {
    /// Classify an input string as a URL or a file path.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SourceError::InvalidSource(
                "empty document source".to_string(),
            ));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| SourceError::InvalidSource(format!("{trimmed}: {e}")))?;
            return Ok(Self::Url(url));
        }

        if trimmed.contains("://") {
            return Err(SourceError::InvalidSource(format!(
                "unsupported scheme in {trimmed}"
            )));
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
        }
    }
}
