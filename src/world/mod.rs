pub mod terrain;

pub use terrain::{build_mosaic, TerrainPatch};
