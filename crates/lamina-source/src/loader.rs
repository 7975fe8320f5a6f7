//! Fetching and decoding the panel document
//!
//! Stages are explicit: `fetch` produces the raw body, `decode` the typed
//! tab set, `load` chains the two.

use std::time::Duration;

use lamina_panel::TabSet;
use reqwest::redirect::Policy;

use crate::error::SourceError;
use crate::source::DocumentSource;
use crate::Result;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 5;

#[derive(Clone)]
pub struct DocumentLoader {
    client: reqwest::Client,
}

impl DocumentLoader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { client })
    }

    /// Fetch the raw document body from a source.
    pub async fn fetch(&self, source: &DocumentSource) -> Result<String> {
        match source {
            DocumentSource::File(path) => {
                let body =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|e| SourceError::Io {
                            path: path.display().to_string(),
                            source: e,
                        })?;

                tracing::debug!(
                    path = %path.display(),
                    bytes = body.len(),
                    "Read panel document"
                );

                Ok(body)
            }
            DocumentSource::Url(url) => {
                let response =
                    self.client
                        .get(url.clone())
                        .send()
                        .await
                        .map_err(|e| SourceError::Http {
                            url: url.to_string(),
                            source: e,
                        })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::HttpStatus {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }

                let body = response.text().await.map_err(|e| SourceError::Http {
                    url: url.to_string(),
                    source: e,
                })?;

                tracing::debug!(url = %url, bytes = body.len(), "Fetched panel document");

                Ok(body)
            }
        }
    }

    /// Decode a document body into the typed tab set.
    ///
    /// No schema validation beyond the typed shape; unknown fields are
    /// ignored.
    pub fn decode(&self, body: &str) -> Result<TabSet> {
        let set: TabSet = serde_json::from_str(body)?;
        tracing::debug!(tab_count = set.len(), "Decoded panel document");
        Ok(set)
    }

    /// Fetch then decode.
    pub async fn load(&self, source: &DocumentSource) -> Result<TabSet> {
        let body = self.fetch(source).await?;
        self.decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed() {
        let loader = DocumentLoader::new().unwrap();
        let set = loader
            .decode(r#"{ "tabs": [ { "name": "Home", "content": "Welcome" }, { "name": "About", "content": "Us" } ] }"#)
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.tabs[0].name, "Home");
        assert_eq!(set.tabs[1].content, "Us");
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let loader = DocumentLoader::new().unwrap();
        let set = loader
            .decode(r#"{ "version": 3, "tabs": [ { "name": "A", "content": "a", "icon": "x.png" } ] }"#)
            .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_decode_empty_set() {
        let loader = DocumentLoader::new().unwrap();
        let set = loader.decode(r#"{ "tabs": [] }"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        let loader = DocumentLoader::new().unwrap();
        assert!(matches!(
            loader.decode("not json at all"),
            Err(SourceError::Decode(_))
        ));
        assert!(loader.decode(r#"{ "tabs": "nope" }"#).is_err());
        assert!(loader.decode(r#"{ "tabs": [ { "name": "A" } ] }"#).is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabsContent.json");
        std::fs::write(&path, r#"{ "tabs": [ { "name": "Home", "content": "Welcome" } ] }"#)
            .unwrap();

        let loader = DocumentLoader::new().unwrap();
        let set = loader.load(&DocumentSource::File(path)).await.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.tabs[0].name, "Home");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let loader = DocumentLoader::new().unwrap();
        let err = loader
            .fetch(&DocumentSource::File(path))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
