// Adapters layer: concrete asset sources and exhibit renderers.

pub mod http;
pub mod local;
pub mod memory;
pub mod render;

pub use http::HttpAssets;
pub use local::LocalAssets;
pub use memory::InMemoryAssets;
pub use render::JsonFileRenderer;
