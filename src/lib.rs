pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::MuseumConfig;

pub use adapters::{HttpAssets, InMemoryAssets, JsonFileRenderer, LocalAssets};
pub use crate::core::{
    cache::ImageCache,
    demo::DemoCatalog,
    layout::{layout, layout_named},
    museum::MuseumEngine,
    resolver::{PhotoResolver, ResolverOptions},
};
pub use domain::model::{Exhibit, LayoutMode, PhotoRecord, PlacementSpec, ThemeDescriptor, Vec3};
pub use domain::state::MuseumState;
pub use utils::error::{MuseumError, Result};
