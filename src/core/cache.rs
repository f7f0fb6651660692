use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Loaded image bytes keyed by source URI. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: Arc<RwLock<HashMap<String, Arc<Vec<u8>>>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, source: &str) -> Option<Arc<Vec<u8>>> {
        self.entries.read().await.get(source).cloned()
    }

    pub async fn contains(&self, source: &str) -> bool {
        self.entries.read().await.contains_key(source)
    }

    pub async fn insert(&self, source: impl Into<String>, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        let bytes = Arc::new(bytes);
        self.entries
            .write()
            .await
            .insert(source.into(), Arc::clone(&bytes));
        bytes
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
        tracing::debug!("Photo cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = ImageCache::new();
        let other = cache.clone();

        cache.insert("a.jpg", vec![1, 2, 3]).await;
        assert!(other.contains("a.jpg").await);
        assert_eq!(other.get("a.jpg").await.unwrap().as_slice(), &[1, 2, 3]);

        other.clear().await;
        assert!(cache.is_empty().await);
    }
}
