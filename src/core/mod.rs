pub mod cache;
pub mod demo;
pub mod layout;
pub mod museum;
pub mod resolver;

pub use crate::domain::model::{Exhibit, LayoutMode, PhotoRecord, PlacementSpec, ThemeDescriptor};
pub use crate::domain::ports::{AssetExistenceProbe, AssetFetcher, ExhibitRenderer};
pub use crate::domain::state::MuseumState;
pub use crate::utils::error::Result;
