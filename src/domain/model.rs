use crate::utils::error::MuseumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One photo as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Position in scene units, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementSpec {
    pub position: Vec3,
    pub rotation: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Wall,
    Circle,
    Grid,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Wall => "wall",
            LayoutMode::Circle => "circle",
            LayoutMode::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = MuseumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wall" => Ok(LayoutMode::Wall),
            "circle" => Ok(LayoutMode::Circle),
            "grid" => Ok(LayoutMode::Grid),
            _ => Err(MuseumError::UnsupportedLayout(s.to_string())),
        }
    }
}

/// How the companion engine front end mounts photos in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    #[default]
    WallMounted,
    Floating,
    Pedestal,
    Hanging,
    Scattered,
    Circular,
}

impl FromStr for DisplayStyle {
    type Err = MuseumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "wall_mounted" => Ok(DisplayStyle::WallMounted),
            "floating" => Ok(DisplayStyle::Floating),
            "pedestal" => Ok(DisplayStyle::Pedestal),
            "hanging" => Ok(DisplayStyle::Hanging),
            "scattered" => Ok(DisplayStyle::Scattered),
            "circular" => Ok(DisplayStyle::Circular),
            _ => Err(MuseumError::UnsupportedDisplayStyle(s.to_string())),
        }
    }
}

pub const DEFAULT_FRAME_COLOR: &str = "#2c2c2c";
pub const DEFAULT_AMBIENT_VOLUME: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub environment: String,
    pub photo_folder: String,
    pub layout: LayoutMode,
    pub display_style: DisplayStyle,
    pub ambient_sound: Option<String>,
    pub ambient_volume: f64,
    pub frame_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    pub color: String,
    pub frame_width: f64,
    pub frame_height: f64,
    pub photo_width: f64,
    pub photo_height: f64,
}

impl FrameStyle {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            frame_width: 2.2,
            frame_height: 1.7,
            photo_width: 2.0,
            photo_height: 1.5,
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::with_color(DEFAULT_FRAME_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientAudio {
    pub source: String,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitItem {
    pub photo: PhotoRecord,
    pub placement: PlacementSpec,
}

/// Everything the renderer needs to present one themed room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibit {
    pub theme_id: String,
    pub theme_name: String,
    pub environment: String,
    pub layout: LayoutMode,
    pub display_style: DisplayStyle,
    pub frame: FrameStyle,
    pub ambient: Option<AmbientAudio>,
    pub items: Vec<ExhibitItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_parsing() {
        assert_eq!("wall".parse::<LayoutMode>().unwrap(), LayoutMode::Wall);
        assert_eq!(" Circle ".parse::<LayoutMode>().unwrap(), LayoutMode::Circle);
        assert_eq!("GRID".parse::<LayoutMode>().unwrap(), LayoutMode::Grid);

        let err = "spiral".parse::<LayoutMode>().unwrap_err();
        assert!(matches!(err, MuseumError::UnsupportedLayout(name) if name == "spiral"));
    }

    #[test]
    fn test_display_style_parsing() {
        assert_eq!(
            "wall-mounted".parse::<DisplayStyle>().unwrap(),
            DisplayStyle::WallMounted
        );
        assert_eq!("circular".parse::<DisplayStyle>().unwrap(), DisplayStyle::Circular);
        assert!("upside_down".parse::<DisplayStyle>().is_err());
    }

    #[test]
    fn test_photo_record_defaults_when_deserializing() {
        let record: PhotoRecord =
            serde_json::from_str(r#"{"source": "a.jpg", "title": "A"}"#).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.date, None);
        assert!(record.tags.is_empty());
    }
}
