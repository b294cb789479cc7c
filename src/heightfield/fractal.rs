use anyhow::Result;
use glam::Vec2;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::ElevationSource;

/// Seeded fractal Perlin elevation.
///
/// Octaves, lacunarity and persistence shape the fractal; amplitude scales the
/// final displacement so terrain relief stays proportionate to the unit patch.
pub struct FractalElevation {
    fbm: Fbm<Perlin>,
    amplitude: f32,
    offset: Vec2,
}

impl FractalElevation {
    pub fn new(
        seed: u32,
        octaves: usize,
        lacunarity: f64,
        persistence: f64,
        amplitude: f32,
    ) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(octaves)
            .set_lacunarity(lacunarity)
            .set_persistence(persistence);

        Self {
            fbm,
            amplitude,
            offset: Vec2::ZERO,
        }
    }

    /// Phase offset in grid coordinates. Neighboring mosaic patches use
    /// offsets one unit apart, so the fractal continues across the seam.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

impl ElevationSource for FractalElevation {
    fn sample(&self, x: f32, y: f32) -> Result<f32> {
        let p = [
            (x + self.offset.x) as f64,
            (y + self.offset.y) as f64,
        ];
        Ok(self.fbm.get(p) as f32 * self.amplitude)
    }
}
