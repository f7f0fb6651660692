use crate::domain::model::Exhibit;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Answers whether an asset can be loaded. Implementations report `false`
/// for anything that is not a definite success.
#[async_trait]
pub trait AssetExistenceProbe: Send + Sync {
    async fn exists(&self, uri: &str) -> bool;
}

/// Reads the raw bytes of an asset such as a manifest or an image.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Presents an exhibit and returns where it ended up.
#[async_trait]
pub trait ExhibitRenderer: Send + Sync {
    async fn render(&self, exhibit: &Exhibit) -> Result<String>;
}
