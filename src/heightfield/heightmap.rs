use anyhow::{ensure, Result};

use super::ElevationSource;

/// Single-channel elevation image, row-major, sized for upload as an
/// `R32Float` texture.
pub struct HeightmapImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl HeightmapImage {
    /// Samples `source` over [0,1]^2 at `width x height` resolution.
    pub fn from_source(width: u32, height: u32, source: &dyn ElevationSource) -> Result<Self> {
        ensure!(
            width >= 2 && height >= 2,
            "heightmap must be at least 2x2, got {width}x{height}"
        );

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for j in 0..height {
            for i in 0..width {
                let x = i as f32 / (width - 1) as f32;
                let y = j as f32 / (height - 1) as f32;
                pixels.push(source.sample(x, y)?);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Elevation range over the whole image.
    pub fn min_max(&self) -> (f32, f32) {
        self.pixels.iter().fold((f32::MAX, f32::MIN), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        })
    }
}
