use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::heightfield::{ElevationPalette, FractalElevation};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: 128,
            rows: 128,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    pub seed: u32,
    pub octaves: usize,
    pub lacunarity: f64,
    pub persistence: f64,
    pub amplitude: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 8,
            lacunarity: 2.0,
            persistence: 0.5,
            amplitude: 0.5,
        }
    }
}

impl NoiseSettings {
    pub fn elevation(&self) -> FractalElevation {
        FractalElevation::new(
            self.seed,
            self.octaves,
            self.lacunarity,
            self.persistence,
            self.amplitude,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MosaicSettings {
    pub patches_x: u32,
    pub patches_z: u32,
    /// World-space edge length of one patch; the unit grid is scaled by this.
    pub patch_size: f32,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            patches_x: 2,
            patches_z: 2,
            patch_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub grid: GridSettings,
    pub noise: NoiseSettings,
    pub mosaic: MosaicSettings,
    pub palette: ElevationPalette,
}

impl TerrainSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = toml::from_str(&contents)
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }
}
