pub mod settings;

pub use settings::{GridSettings, MosaicSettings, NoiseSettings, TerrainSettings};
