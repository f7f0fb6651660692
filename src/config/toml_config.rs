use crate::core::demo::DemoCatalog;
use crate::core::resolver::{
    ResolverOptions, DEFAULT_EXTENSIONS, DEFAULT_MAX_CANDIDATE_INDEX, DEFAULT_MAX_FALLBACK_PHOTOS,
};
use crate::domain::model::{
    DisplayStyle, LayoutMode, PhotoRecord, ThemeDescriptor, DEFAULT_AMBIENT_VOLUME,
    DEFAULT_FRAME_COLOR,
};
use crate::utils::error::{MuseumError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumConfig {
    pub museum: MuseumInfo,
    pub probe: Option<ProbeConfig>,
    pub fallback: Option<FallbackConfig>,
    pub themes: Vec<ThemeConfig>,
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub timeout_seconds: Option<u64>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub max_photos: Option<usize>,
    pub max_index: Option<u32>,
    pub extensions: Option<Vec<String>>,
    /// `YYYY-MM-DD` stamped on probed photos.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub photo_folder: String,
    pub layout: String,
    pub display_style: Option<String>,
    pub ambient_sound: Option<String>,
    pub ambient_volume: Option<f64>,
    pub frame_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub default_theme: String,
    #[serde(default)]
    pub photos: HashMap<String, Vec<PhotoRecord>>,
}

impl MuseumConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MuseumError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MuseumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSET_HOST})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MuseumError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The two rooms the museum ships with.
    pub fn builtin() -> Self {
        Self {
            museum: MuseumInfo {
                name: "VR Photo Museum".to_string(),
                description: None,
            },
            probe: None,
            fallback: None,
            themes: vec![
                ThemeConfig {
                    id: "gallery".to_string(),
                    name: "Modern Gallery".to_string(),
                    description: Some("Clean, contemporary museum space".to_string()),
                    environment: Some("gallery".to_string()),
                    photo_folder: "assets/photos/gallery/".to_string(),
                    layout: "wall".to_string(),
                    display_style: Some("wall_mounted".to_string()),
                    ambient_sound: Some("assets/audio/ambient/gallery.mp3".to_string()),
                    ambient_volume: None,
                    frame_color: None,
                },
                ThemeConfig {
                    id: "thailand".to_string(),
                    name: "Thailand Journey".to_string(),
                    description: Some(
                        "Tropical paradise with bamboo and nature sounds".to_string(),
                    ),
                    environment: Some("thailand".to_string()),
                    photo_folder: "assets/photos/thailand/".to_string(),
                    layout: "circle".to_string(),
                    display_style: Some("circular".to_string()),
                    ambient_sound: Some("assets/audio/ambient/thailand.mp3".to_string()),
                    ambient_volume: None,
                    frame_color: Some("#8B4513".to_string()),
                },
            ],
            demo: None,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("museum.name", &self.museum.name)?;

        if let Some(probe) = &self.probe {
            if let Some(timeout) = probe.timeout_seconds {
                validation::validate_positive_number("probe.timeout_seconds", timeout as usize, 1)?;
            }
            if let Some(base_url) = &probe.base_url {
                validation::validate_url("probe.base_url", base_url)?;
            }
        }

        if let Some(fallback) = &self.fallback {
            if let Some(max_photos) = fallback.max_photos {
                validation::validate_positive_number("fallback.max_photos", max_photos, 1)?;
            }
            if let Some(extensions) = &fallback.extensions {
                validation::validate_extensions("fallback.extensions", extensions)?;
            }
        }

        if self.themes.is_empty() {
            return Err(MuseumError::MissingConfigError {
                field: "themes".to_string(),
            });
        }

        let mut ids = HashSet::new();
        for theme in &self.themes {
            if !ids.insert(theme.id.as_str()) {
                return Err(MuseumError::InvalidConfigValueError {
                    field: "themes.id".to_string(),
                    value: theme.id.clone(),
                    reason: "Theme ids must be unique".to_string(),
                });
            }
        }

        // descriptor conversion performs the per-theme checks
        self.theme_descriptors()?;
        self.resolver_options()?;
        self.demo_catalog()?;

        Ok(())
    }

    pub fn theme_descriptors(&self) -> Result<Vec<ThemeDescriptor>> {
        self.themes.iter().map(ThemeConfig::to_descriptor).collect()
    }

    pub fn resolver_options(&self) -> Result<ResolverOptions> {
        let mut options = ResolverOptions::default();

        if let Some(timeout) = self.probe.as_ref().and_then(|p| p.timeout_seconds) {
            options.probe_timeout = Duration::from_secs(timeout);
        }

        if let Some(fallback) = &self.fallback {
            options.max_fallback_photos =
                fallback.max_photos.unwrap_or(DEFAULT_MAX_FALLBACK_PHOTOS);
            options.max_candidate_index = fallback.max_index.unwrap_or(DEFAULT_MAX_CANDIDATE_INDEX);
            options.extensions = fallback.extensions.clone().unwrap_or_else(|| {
                DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
            });
            options.fallback_date = fallback
                .date
                .as_deref()
                .map(|raw| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                        MuseumError::InvalidConfigValueError {
                            field: "fallback.date".to_string(),
                            value: raw.to_string(),
                            reason: e.to_string(),
                        }
                    })
                })
                .transpose()?;
        }

        Ok(options)
    }

    pub fn demo_catalog(&self) -> Result<DemoCatalog> {
        match &self.demo {
            Some(demo) => DemoCatalog::new(demo.default_theme.clone(), demo.photos.clone()),
            None => Ok(DemoCatalog::builtin()),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.probe.as_ref().and_then(|p| p.base_url.as_deref())
    }
}

impl ThemeConfig {
    pub fn to_descriptor(&self) -> Result<ThemeDescriptor> {
        validation::validate_non_empty_string("themes.id", &self.id)?;
        validation::validate_non_empty_string("themes.name", &self.name)?;
        validation::validate_path("themes.photo_folder", &self.photo_folder)?;

        let layout: LayoutMode = self.layout.parse()?;
        let display_style = match &self.display_style {
            Some(style) => style.parse()?,
            None if layout == LayoutMode::Circle => DisplayStyle::Circular,
            None => DisplayStyle::default(),
        };

        let ambient_volume = self.ambient_volume.unwrap_or(DEFAULT_AMBIENT_VOLUME);
        validation::validate_range("themes.ambient_volume", ambient_volume, 0.0, 1.0)?;

        let frame_color = self
            .frame_color
            .clone()
            .unwrap_or_else(|| DEFAULT_FRAME_COLOR.to_string());
        validation::validate_non_empty_string("themes.frame_color", &frame_color)?;

        Ok(ThemeDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            environment: self.environment.clone().unwrap_or_else(|| self.id.clone()),
            photo_folder: self.photo_folder.clone(),
            layout,
            display_style,
            ambient_sound: self.ambient_sound.clone().filter(|s| !s.is_empty()),
            ambient_volume,
            frame_color,
        })
    }
}

impl Validate for MuseumConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
