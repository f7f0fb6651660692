use crate::domain::ports::{AssetExistenceProbe, AssetFetcher};
use crate::utils::error::{MuseumError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory asset store. Records every probed URI so callers can check the
/// order in which assets were looked up.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    files: Arc<HashMap<String, Vec<u8>>>,
    delay: Option<Duration>,
    probed: Arc<Mutex<Vec<String>>>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, uri: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Arc::make_mut(&mut self.files).insert(uri.into(), bytes.into());
        self
    }

    pub fn with_files<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files = Arc::make_mut(&mut self.files);
        for uri in uris {
            files.insert(uri.into(), Vec::new());
        }
        self
    }

    /// Every probe and fetch sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed
            .lock()
            .map(|probed| probed.clone())
            .unwrap_or_default()
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AssetExistenceProbe for InMemoryAssets {
    async fn exists(&self, uri: &str) -> bool {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(uri.to_string());
        }
        self.wait().await;
        self.files.contains_key(uri)
    }
}

#[async_trait]
impl AssetFetcher for InMemoryAssets {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        self.wait().await;
        self.files.get(uri).cloned().ok_or_else(|| {
            MuseumError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", uri),
            ))
        })
    }
}
