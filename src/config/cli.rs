use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "photo-museum")]
#[command(about = "Resolve a themed photo room and lay it out for the VR museum")]
pub struct CliConfig {
    /// Path to a TOML museum configuration; builtin themes are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Theme id to open; defaults to the first configured theme
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Directory the theme folders are relative to
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Resolve assets over HTTP against this URL instead of the local root
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where to write the exhibit JSON; `-` for stdout
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Override the theme's layout (wall, circle, grid)
    #[arg(long)]
    pub layout: Option<String>,

    /// Fetch every resolved photo before writing the exhibit
    #[arg(long)]
    pub preload: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root", &self.root)?;
        validation::validate_path("output", &self.output)?;
        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }
        if let Some(layout) = &self.layout {
            layout.parse::<crate::domain::model::LayoutMode>()?;
        }
        if let Some(theme) = &self.theme {
            validation::validate_non_empty_string("theme", theme)?;
        }
        Ok(())
    }
}
