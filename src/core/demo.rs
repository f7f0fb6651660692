use crate::domain::model::PhotoRecord;
use crate::utils::error::{MuseumError, Result};
use std::collections::HashMap;

pub const DEFAULT_DEMO_THEME: &str = "gallery";

/// Last-resort photo tables keyed by theme id.
///
/// Construction guarantees the default theme has at least one photo, so a
/// lookup always yields something to show.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoCatalog {
    default_theme: String,
    tables: HashMap<String, Vec<PhotoRecord>>,
}

impl DemoCatalog {
    pub fn new(
        default_theme: impl Into<String>,
        tables: HashMap<String, Vec<PhotoRecord>>,
    ) -> Result<Self> {
        let default_theme = default_theme.into();
        match tables.get(&default_theme) {
            Some(photos) if !photos.is_empty() => Ok(Self {
                default_theme,
                tables,
            }),
            _ => Err(MuseumError::ConfigValidationError {
                field: "demo.default_theme".to_string(),
                message: format!("demo table '{}' is missing or empty", default_theme),
            }),
        }
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    /// Photos for `theme_id`, or the default theme's photos when the theme has
    /// no (or an empty) table.
    pub fn photos_for(&self, theme_id: &str) -> &[PhotoRecord] {
        match self.tables.get(theme_id) {
            Some(photos) if !photos.is_empty() => photos,
            _ => &self.tables[&self.default_theme],
        }
    }

    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            "gallery".to_string(),
            vec![
                demo(
                    "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=800&h=600&fit=crop",
                    "Modern Architecture",
                    "Contemporary building design",
                    "Urban Center",
                ),
                demo(
                    "https://images.unsplash.com/photo-1567696911980-2eed69a46d8f?w=800&h=600&fit=crop",
                    "Gallery Interior",
                    "Minimalist exhibition space",
                    "Art Museum",
                ),
                demo(
                    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
                    "Abstract Art",
                    "Contemporary artwork display",
                    "Modern Gallery",
                ),
                demo(
                    "https://images.unsplash.com/photo-1577720580979-7c503ca1b874?w=800&h=600&fit=crop",
                    "Sculpture Exhibition",
                    "Three-dimensional artworks",
                    "Sculpture Hall",
                ),
            ],
        );
        tables.insert(
            "thailand".to_string(),
            vec![
                demo(
                    "https://images.unsplash.com/photo-1528181304800-259b08848526?w=800&h=600&fit=crop",
                    "Thai Temple",
                    "Traditional Buddhist architecture",
                    "Bangkok, Thailand",
                ),
                demo(
                    "https://images.unsplash.com/photo-1552465011-b4e21bf6e79a?w=800&h=600&fit=crop",
                    "Tropical Beach",
                    "Crystal clear waters and white sand",
                    "Phuket, Thailand",
                ),
                demo(
                    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800&h=600&fit=crop",
                    "Thai Market",
                    "Colorful floating market",
                    "Damnoen Saduak",
                ),
                demo(
                    "https://images.unsplash.com/photo-1571344514942-3e36e1e8b626?w=800&h=600&fit=crop",
                    "Jungle Landscape",
                    "Lush tropical rainforest",
                    "Khao Sok National Park",
                ),
            ],
        );

        Self {
            default_theme: DEFAULT_DEMO_THEME.to_string(),
            tables,
        }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn demo(source: &str, title: &str, description: &str, location: &str) -> PhotoRecord {
    PhotoRecord {
        source: source.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        date: None,
        tags: Vec::new(),
    }
}
