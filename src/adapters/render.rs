use crate::domain::model::Exhibit;
use crate::domain::ports::ExhibitRenderer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes the exhibit as pretty-printed JSON. A path of `-` means stdout.
#[derive(Debug, Clone)]
pub struct JsonFileRenderer {
    path: PathBuf,
}

impl JsonFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ExhibitRenderer for JsonFileRenderer {
    async fn render(&self, exhibit: &Exhibit) -> Result<String> {
        let json = serde_json::to_string_pretty(exhibit)?;

        if self.path.as_os_str() == "-" {
            println!("{}", json);
            return Ok("stdout".to_string());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, json).await?;
        tracing::debug!("Exhibit with {} items written", exhibit.items.len());
        Ok(self.path.display().to_string())
    }
}
