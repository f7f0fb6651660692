use crate::core::cache::ImageCache;
use crate::core::demo::DemoCatalog;
use crate::domain::model::PhotoRecord;
use crate::domain::ports::{AssetExistenceProbe, AssetFetcher};
use crate::utils::error::{MuseumError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MANIFEST_FILE_NAME: &str = "photos.json";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_FALLBACK_PHOTOS: usize = 12;
pub const DEFAULT_MAX_CANDIDATE_INDEX: u32 = 20;
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["JPG", "jpg", "PNG", "png", "JPEG", "jpeg"];

/// Contents of a theme folder's `photos.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub photos: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Top-level shape only; entries are decoded one by one.
#[derive(Deserialize)]
struct RawManifest {
    photos: Option<Vec<serde_json::Value>>,
}

impl Manifest {
    /// Parses `photos.json`, skipping entries that don't decode.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawManifest = serde_json::from_slice(bytes)?;

        let photos = raw
            .photos
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| {
                serde_json::from_value::<ManifestEntry>(value)
                    .map_err(|e| tracing::warn!("Skipping manifest entry {}: {}", position, e))
                    .ok()
            })
            .collect();

        Ok(Self { photos })
    }
}

#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub probe_timeout: Duration,
    pub max_fallback_photos: usize,
    pub max_candidate_index: u32,
    pub extensions: Vec<String>,
    /// Date stamped on probed photos; today when unset.
    pub fallback_date: Option<NaiveDate>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_fallback_photos: DEFAULT_MAX_FALLBACK_PHOTOS,
            max_candidate_index: DEFAULT_MAX_CANDIDATE_INDEX,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            fallback_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: usize,
    pub cached: usize,
    pub failed: usize,
}

/// Turns a theme folder into a list of photos.
///
/// Sources are tried in order: the folder's manifest, probing for
/// `{theme}{n}.{ext}` files, then the demo catalog. Failures along the way are
/// logged and swallowed, so [`PhotoResolver::resolve`] always returns photos.
pub struct PhotoResolver<P: AssetExistenceProbe, F: AssetFetcher> {
    probe: P,
    fetcher: F,
    options: ResolverOptions,
    demo: DemoCatalog,
    cache: ImageCache,
}

impl<P: AssetExistenceProbe, F: AssetFetcher> PhotoResolver<P, F> {
    pub fn new(probe: P, fetcher: F) -> Self {
        Self {
            probe,
            fetcher,
            options: ResolverOptions::default(),
            demo: DemoCatalog::builtin(),
            cache: ImageCache::new(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_demo_catalog(mut self, demo: DemoCatalog) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_cache(mut self, cache: ImageCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub async fn resolve(&self, folder: &str, theme_id: &str) -> Vec<PhotoRecord> {
        tracing::info!("📁 Loading photos for '{}' from: {}", theme_id, folder);

        match self.load_manifest(folder).await {
            Ok(manifest) if !manifest.photos.is_empty() => {
                tracing::debug!("Found manifest with {} photos", manifest.photos.len());
                let photos = self.photos_from_manifest(&manifest, folder).await;
                if !photos.is_empty() {
                    tracing::info!("✅ Loaded {} photos from manifest", photos.len());
                    return photos;
                }
                tracing::warn!("None of the manifest entries for '{}' exist", theme_id);
            }
            Ok(_) => tracing::debug!("Manifest in {} lists no photos", folder),
            Err(e) => tracing::debug!("{}", e),
        }

        tracing::debug!("Trying fallback photo probing for '{}'", theme_id);
        let photos = self.photos_from_probing(folder, theme_id).await;
        if !photos.is_empty() {
            tracing::info!("✅ Found {} photos by probing", photos.len());
            return photos;
        }

        tracing::info!("Using demo photos for '{}'", theme_id);
        self.demo.photos_for(theme_id).to_vec()
    }

    pub async fn load_manifest(&self, folder: &str) -> Result<Manifest> {
        let path = join_asset_path(folder, MANIFEST_FILE_NAME);
        let unavailable = |reason: String| MuseumError::ManifestUnavailable {
            path: path.clone(),
            reason,
        };

        let bytes = self
            .fetch(&path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        Manifest::from_slice(&bytes).map_err(|e| unavailable(e.to_string()))
    }

    async fn photos_from_manifest(&self, manifest: &Manifest, folder: &str) -> Vec<PhotoRecord> {
        let mut photos = Vec::with_capacity(manifest.photos.len());

        for entry in &manifest.photos {
            let source = join_asset_path(folder, &entry.filename);
            if !self.exists(&source).await {
                tracing::warn!("{}", MuseumError::AssetMissing { uri: source });
                continue;
            }

            photos.push(PhotoRecord {
                source,
                title: entry
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| entry.filename.clone()),
                description: entry.description.clone().unwrap_or_default(),
                location: entry.location.clone().unwrap_or_default(),
                date: entry.date.clone().filter(|d| !d.is_empty()),
                tags: entry.tags.clone().unwrap_or_default(),
            });
        }

        photos
    }

    async fn photos_from_probing(&self, folder: &str, theme_id: &str) -> Vec<PhotoRecord> {
        let cap = self.options.max_fallback_photos;
        if theme_id.trim().is_empty() || cap == 0 {
            return Vec::new();
        }

        let display_name = capitalize(theme_id);
        let date = self
            .options
            .fallback_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string();

        let mut photos = Vec::new();
        'names: for name in candidate_names(theme_id, self.options.max_candidate_index) {
            for ext in &self.options.extensions {
                let filename = format!("{}.{}", name, ext);
                let source = join_asset_path(folder, &filename);
                if !self.exists(&source).await {
                    continue;
                }

                tracing::debug!("✅ Found photo: {}", filename);
                photos.push(PhotoRecord {
                    source,
                    title: format!("{} Photo {}", display_name, photos.len() + 1),
                    description: format!("Beautiful memory from {}", theme_id),
                    location: display_name.clone(),
                    date: Some(date.clone()),
                    tags: Vec::new(),
                });

                if photos.len() >= cap {
                    break 'names;
                }
            }
        }

        photos
    }

    /// Fetches every photo not already cached. Failures are counted, not raised.
    pub async fn preload(&self, photos: &[PhotoRecord]) -> PreloadReport {
        tracing::debug!("Preloading {} images...", photos.len());
        let mut report = PreloadReport::default();

        for photo in photos {
            if self.cache.contains(&photo.source).await {
                report.cached += 1;
                continue;
            }

            match self.fetch(&photo.source).await {
                Ok(bytes) => {
                    self.cache.insert(photo.source.clone(), bytes).await;
                    report.loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("❌ Failed to preload {}: {}", photo.title, e);
                    report.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Preloading finished: {} loaded, {} cached, {} failed",
            report.loaded,
            report.cached,
            report.failed
        );
        report
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    async fn exists(&self, uri: &str) -> bool {
        match tokio::time::timeout(self.options.probe_timeout, self.probe.exists(uri)).await {
            Ok(found) => {
                tracing::trace!("Probe {} -> {}", uri, found);
                found
            }
            Err(_) => {
                tracing::debug!(
                    "⏰ {}",
                    MuseumError::ProbeTimeout {
                        uri: uri.to_string(),
                        millis: self.options.probe_timeout.as_millis(),
                    }
                );
                false
            }
        }
    }

    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        tokio::time::timeout(self.options.probe_timeout, self.fetcher.fetch(uri))
            .await
            .map_err(|_| MuseumError::ProbeTimeout {
                uri: uri.to_string(),
                millis: self.options.probe_timeout.as_millis(),
            })?
    }
}

/// Joins a folder and a file name with exactly one `/` between them.
pub fn join_asset_path(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        name.to_string()
    } else if folder.ends_with('/') {
        format!("{}{}", folder, name)
    } else {
        format!("{}/{}", folder, name)
    }
}

/// `{theme}{n}` then `{Theme}{n}` for each n, lowest n first.
pub fn candidate_names(theme_id: &str, max_index: u32) -> Vec<String> {
    let capitalized = capitalize(theme_id);
    let mut names = Vec::new();
    for n in 1..=max_index {
        names.push(format!("{}{}", theme_id, n));
        if capitalized != theme_id {
            names.push(format!("{}{}", capitalized, n));
        }
    }
    names
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_asset_path() {
        assert_eq!(join_asset_path("assets/photos/", "a.jpg"), "assets/photos/a.jpg");
        assert_eq!(join_asset_path("assets/photos", "a.jpg"), "assets/photos/a.jpg");
        assert_eq!(join_asset_path("", "a.jpg"), "a.jpg");
    }

    #[test]
    fn test_candidate_names_order() {
        let names = candidate_names("thailand", 2);
        assert_eq!(names, vec!["thailand1", "Thailand1", "thailand2", "Thailand2"]);
    }

    #[test]
    fn test_candidate_names_skip_duplicate_capitalisation() {
        assert_eq!(candidate_names("Rome", 2), vec!["Rome1", "Rome2"]);
    }

    #[test]
    fn test_manifest_parsing_defaults() {
        let manifest = Manifest::from_slice(
            br#"{"photos": [{"filename": "a.jpg"}, {"filename": "b.jpg", "tags": ["x"]}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.photos.len(), 2);
        assert!(manifest.photos[0].title.is_none());
        assert_eq!(manifest.photos[1].tags, Some(vec!["x".to_string()]));

        assert!(Manifest::from_slice(b"{}").unwrap().photos.is_empty());
        assert!(Manifest::from_slice(br#"{"photos": null}"#).unwrap().photos.is_empty());
        assert!(Manifest::from_slice(b"not json").is_err());
    }

    #[test]
    fn test_manifest_skips_undecodable_entries() {
        let manifest = Manifest::from_slice(
            br#"{"photos": [
                {"filename": "a.jpg", "tags": null},
                {"title": "no file"},
                {"filename": 42},
                {"filename": "b.jpg"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.photos.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert!(manifest.photos[0].tags.is_none());
    }
}
