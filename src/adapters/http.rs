use crate::domain::ports::{AssetExistenceProbe, AssetFetcher};
use crate::utils::error::{MuseumError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Assets served over HTTP. Relative URIs are joined onto `base_url`.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    client: Client,
    base_url: Option<Url>,
}

impl HttpAssets {
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let base_url = base_url
            .map(|raw| {
                // without the trailing slash `join` would drop the last segment
                let normalized = if raw.ends_with('/') {
                    raw.to_string()
                } else {
                    format!("{}/", raw)
                };
                Url::parse(&normalized).map_err(|e| MuseumError::InvalidConfigValueError {
                    field: "base_url".to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("photo-museum/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn resolve_url(&self, uri: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(uri) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        let base = self.base_url.as_ref().ok_or_else(|| MuseumError::ConfigError {
            message: format!("Relative asset URI '{}' needs a base URL", uri),
        })?;
        base.join(uri.trim_start_matches('/'))
            .map_err(|e| MuseumError::InvalidConfigValueError {
                field: "uri".to_string(),
                value: uri.to_string(),
                reason: e.to_string(),
            })
    }

    async fn check(&self, url: Url) -> Result<bool> {
        let response = self.client.head(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED {
            tracing::debug!("HEAD not supported for {}, retrying with GET", url);
            let response = self.client.get(url).send().await?;
            return Ok(response.status().is_success());
        }
        Ok(status.is_success())
    }
}

#[async_trait]
impl AssetExistenceProbe for HttpAssets {
    async fn exists(&self, uri: &str) -> bool {
        let url = match self.resolve_url(uri) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Cannot probe {}: {}", uri, e);
                return false;
            }
        };

        match self.check(url).await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!("❌ Probe failed for {}: {}", uri, e);
                false
            }
        }
    }
}

#[async_trait]
impl AssetFetcher for HttpAssets {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        let url = self.resolve_url(uri)?;
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;

    fn assets(server: &MockServer) -> HttpAssets {
        HttpAssets::new(Some(server.base_url().as_str()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_probe_uses_head() {
        let server = MockServer::start();
        let head_mock = server.mock(|when, then| {
            when.method(HEAD).path("/assets/photos/thailand/thailand1.JPG");
            then.status(200);
        });

        let assets = assets(&server);
        assert!(assets.exists("assets/photos/thailand/thailand1.JPG").await);
        head_mock.assert();
    }

    #[tokio::test]
    async fn test_probe_missing_asset() {
        let server = MockServer::start();
        let head_mock = server.mock(|when, then| {
            when.method(HEAD).path("/missing.jpg");
            then.status(404);
        });

        let assets = assets(&server);
        assert!(!assets.exists("missing.jpg").await);
        head_mock.assert();
    }

    #[tokio::test]
    async fn test_probe_falls_back_to_get() {
        let server = MockServer::start();
        let head_mock = server.mock(|when, then| {
            when.method(HEAD).path("/a.jpg");
            then.status(405);
        });
        let get_mock = server.mock(|when, then| {
            when.method(GET).path("/a.jpg");
            then.status(200).body("jpeg");
        });

        let assets = assets(&server);
        assert!(assets.exists("a.jpg").await);
        head_mock.assert();
        get_mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_manifest() {
        let server = MockServer::start();
        let manifest_mock = server.mock(|when, then| {
            when.method(GET).path("/gallery/photos.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"photos": []}));
        });

        let assets = assets(&server);
        let bytes = assets.fetch("gallery/photos.json").await.unwrap();
        manifest_mock.assert();

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["photos"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gallery/photos.json");
            then.status(500);
        });

        let assets = assets(&server);
        assert!(matches!(
            assets.fetch("gallery/photos.json").await,
            Err(MuseumError::Http(_))
        ));
    }

    #[test]
    fn test_resolve_url() {
        let assets =
            HttpAssets::new(Some("http://localhost:8080/museum"), Duration::from_secs(1)).unwrap();
        assert_eq!(
            assets.resolve_url("assets/a.jpg").unwrap().as_str(),
            "http://localhost:8080/museum/assets/a.jpg"
        );
        assert_eq!(
            assets.resolve_url("https://images.example.com/b.jpg").unwrap().as_str(),
            "https://images.example.com/b.jpg"
        );

        let no_base = HttpAssets::new(None, Duration::from_secs(1)).unwrap();
        assert!(no_base.resolve_url("assets/a.jpg").is_err());
    }
}
