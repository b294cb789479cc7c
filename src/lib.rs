// Terramesh: procedural terrain grid generation
// Pure mesh construction; GPU upload is a thin collaborator over the caller's device

pub mod assets;
pub mod config;
pub mod heightfield;
pub mod mesh;
pub mod utils;
pub mod world;

// Re-export commonly used types for convenience
pub use config::TerrainSettings;
pub use heightfield::{ElevationSource, FractalElevation, HeightmapImage};
pub use mesh::{build_grid, GridDescriptor, TerrainError, TerrainMesh, Vertex};
pub use world::{build_mosaic, TerrainPatch};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
