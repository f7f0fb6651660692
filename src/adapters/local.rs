use crate::domain::ports::{AssetExistenceProbe, AssetFetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Assets served from a directory on disk. URIs are relative to `root`.
#[derive(Debug, Clone)]
pub struct LocalAssets {
    root: PathBuf,
}

impl LocalAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, uri: &str) -> PathBuf {
        Path::new(&self.root).join(uri.trim_start_matches('/'))
    }
}

#[async_trait]
impl AssetExistenceProbe for LocalAssets {
    async fn exists(&self, uri: &str) -> bool {
        match tokio::fs::metadata(self.full_path(uri)).await {
            Ok(meta) => meta.is_file() && meta.len() > 0,
            Err(_) => false,
        }
    }
}

#[async_trait]
impl AssetFetcher for LocalAssets {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.full_path(uri)).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_assets_probe_and_fetch() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("photos")).unwrap();
        std::fs::write(dir.path().join("photos/a.jpg"), b"jpeg").unwrap();
        std::fs::write(dir.path().join("photos/empty.jpg"), b"").unwrap();

        let assets = LocalAssets::new(dir.path());
        assert!(assets.exists("photos/a.jpg").await);
        assert!(assets.exists("/photos/a.jpg").await);
        assert!(!assets.exists("photos/empty.jpg").await);
        assert!(!assets.exists("photos").await);
        assert!(!assets.exists("photos/b.jpg").await);

        assert_eq!(assets.fetch("photos/a.jpg").await.unwrap(), b"jpeg".to_vec());
        assert!(assets.fetch("photos/b.jpg").await.is_err());
    }
}
